/// Commands sent from us to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Uci,
    IsReady,

    UciNewGame,
    Position { fen: String, moves: Vec<String> },
    Go(GoParams),

    Quit,
}

/// Lines the engine sends back.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineReply {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove {
        best_move: String,
        ponder: Option<String>,
    },
    Info(Info),
    Option(String),
    Unknown(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub depth: Option<u8>,
    pub sel_depth: Option<u8>,
    pub nodes: Option<u64>,
    pub time: Option<u64>,
    pub score: Option<Score>,
    pub pv: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Centipawns(i32), // centipawns
    Mate(i32),       // Positive for mate-in-n, negative for mated-in-n
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoParams {
    // Search depth ply only.
    pub depth: Option<u8>,

    // Search exactly movetime milliseconds.
    pub move_time: Option<u64>,
}
