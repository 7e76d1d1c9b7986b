use super::commands::{EngineCommand, GoParams};

pub struct Encoder;

impl Encoder {
    pub fn encode(&self, command: &EngineCommand) -> String {
        match command {
            EngineCommand::Uci => "uci".to_string(),
            EngineCommand::IsReady => "isready".to_string(),
            EngineCommand::UciNewGame => "ucinewgame".to_string(),

            EngineCommand::Position { fen, moves } => {
                if moves.is_empty() {
                    format!("position fen {}", fen)
                } else {
                    format!("position fen {} moves {}", fen, moves.join(" "))
                }
            }
            EngineCommand::Go(params) => encode_go(params),

            EngineCommand::Quit => "quit".to_string(),
        }
    }
}

fn encode_go(params: &GoParams) -> String {
    let mut out = String::from("go");
    if let Some(depth) = params.depth {
        out.push_str(&format!(" depth {}", depth));
    }
    if let Some(move_time) = params.move_time {
        out.push_str(&format!(" movetime {}", move_time));
    }
    out
}
