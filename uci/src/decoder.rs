use log::debug;

use super::commands::{EngineReply, Info, Score};

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> EngineReply {
        let input = input.trim();
        match input {
            "uciok" => EngineReply::UciOk,
            "readyok" => EngineReply::ReadyOk,

            _ if input.starts_with("id name ") => {
                EngineReply::IdName(input["id name ".len()..].trim().to_string())
            }
            _ if input.starts_with("id author ") => {
                EngineReply::IdAuthor(input["id author ".len()..].trim().to_string())
            }
            _ if input.starts_with("bestmove") => self.decode_bestmove(input),
            _ if input.starts_with("info") => EngineReply::Info(self.decode_info(input)),
            _ if input.starts_with("option") => EngineReply::Option(input.to_string()),

            _ => {
                debug!("Unrecognized engine output: {}", input);
                EngineReply::Unknown(input.to_string())
            }
        }
    }

    fn decode_bestmove(&self, input: &str) -> EngineReply {
        // Parse: bestmove <move> [ponder <move>]
        let mut tokens = input.split_whitespace().skip(1);
        let best_move = tokens.next().unwrap_or_default().to_string();
        let ponder = match tokens.next() {
            Some("ponder") => tokens.next().map(str::to_string),
            _ => None,
        };

        EngineReply::BestMove { best_move, ponder }
    }

    fn decode_info(&self, input: &str) -> Info {
        let tokens: Vec<&str> = input.split_whitespace().collect();

        let score = tokens
            .windows(3)
            .find(|w| w[0] == "score")
            .and_then(|w| match (w[1], w[2].parse::<i32>()) {
                ("cp", Ok(cp)) => Some(Score::Centipawns(cp)),
                ("mate", Ok(moves)) => Some(Score::Mate(moves)),
                _ => None,
            });

        // The principal variation runs to the end of the line.
        let pv = tokens
            .iter()
            .position(|&t| t == "pv")
            .map(|idx| tokens[idx + 1..].iter().map(|s| s.to_string()).collect())
            .unwrap_or_default();

        Info {
            depth: extract_numeric_param(input, "depth").map(|d| d as u8),
            sel_depth: extract_numeric_param(input, "seldepth").map(|d| d as u8),
            nodes: extract_numeric_param(input, "nodes"),
            time: extract_numeric_param(input, "time"),
            score,
            pv,
        }
    }
}

fn extract_numeric_param(input: &str, param: &str) -> Option<u64> {
    input
        .split_whitespace()
        .collect::<Vec<&str>>()
        .windows(2)
        .find(|w| w[0] == param)
        .and_then(|w| w[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_replies() {
        assert!(matches!(Decoder.decode("uciok"), EngineReply::UciOk));
        assert!(matches!(Decoder.decode("readyok"), EngineReply::ReadyOk));
        assert!(matches!(Decoder.decode("readyok\r"), EngineReply::ReadyOk));
    }

    #[test]
    fn test_id_lines() {
        let EngineReply::IdName(name) = Decoder.decode("id name Stockfish 16") else {
            panic!("Expected IdName")
        };
        assert_eq!(name, "Stockfish 16");

        let EngineReply::IdAuthor(author) = Decoder.decode("id author the Stockfish developers")
        else {
            panic!("Expected IdAuthor")
        };
        assert_eq!(author, "the Stockfish developers");
    }

    #[test]
    fn test_bestmove_with_ponder() {
        let EngineReply::BestMove { best_move, ponder } = Decoder.decode("bestmove e2e4 ponder e7e5")
        else {
            panic!("Expected BestMove")
        };
        assert_eq!(best_move, "e2e4");
        assert_eq!(ponder.as_deref(), Some("e7e5"));
    }

    #[test]
    fn test_bestmove_without_ponder() {
        let EngineReply::BestMove { best_move, ponder } = Decoder.decode("bestmove e7e8q") else {
            panic!("Expected BestMove")
        };
        assert_eq!(best_move, "e7e8q");
        assert!(ponder.is_none());
    }

    #[test]
    fn test_bestmove_none() {
        let EngineReply::BestMove { best_move, .. } = Decoder.decode("bestmove (none)") else {
            panic!("Expected BestMove")
        };
        assert_eq!(best_move, "(none)");
    }

    #[test]
    fn test_info_centipawns() {
        let EngineReply::Info(info) = Decoder.decode(
            "info depth 12 seldepth 18 multipv 1 score cp 35 nodes 123456 nps 900000 time 137 pv e2e4 e7e5 g1f3",
        ) else {
            panic!("Expected Info")
        };
        assert_eq!(info.depth, Some(12));
        assert_eq!(info.sel_depth, Some(18));
        assert_eq!(info.nodes, Some(123456));
        assert_eq!(info.time, Some(137));
        assert_eq!(info.score, Some(Score::Centipawns(35)));
        assert_eq!(info.pv, vec!["e2e4", "e7e5", "g1f3"]);
    }

    #[test]
    fn test_info_mate() {
        let EngineReply::Info(info) = Decoder.decode("info depth 3 score mate -2 pv h7h8") else {
            panic!("Expected Info")
        };
        assert_eq!(info.score, Some(Score::Mate(-2)));
    }

    #[test]
    fn test_info_string_has_no_fields() {
        let EngineReply::Info(info) = Decoder.decode("info string NNUE evaluation enabled") else {
            panic!("Expected Info")
        };
        assert_eq!(info, Info::default());
    }

    #[test]
    fn test_option_and_unknown() {
        let line = "option name Hash type spin default 16 min 1 max 33554432";
        let EngineReply::Option(raw) = Decoder.decode(line) else {
            panic!("Expected Option")
        };
        assert_eq!(raw, line);

        assert!(matches!(
            Decoder.decode("Stockfish 16 by the Stockfish developers"),
            EngineReply::Unknown(_)
        ));
    }
}
