use evaluation::{hce::HCEConfig, PieceValues};
use std::str::FromStr;
use uci::{UciOption, UciOptionType};

fn option(include: bool, name: &'static str, option_type: UciOptionType) -> Option<UciOption> {
    if include {
        Some(UciOption { name, option_type })
    } else {
        None
    }
}

macro_rules! define_config {
    ($(($field:ident: $type:ty, $name:literal, $option_type:expr, $default:expr, $include:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct EngineConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        option: option($include, $name, $option_type),
                    },)*
                }
            }
        }

        impl EngineConfig {
            pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
                match name {
                    $($name if $include => self.$field.update(value),)*
                    _ => Err(format!("Unknown parameter: {}", name)),
                }
            }

            /// `option name ...` declarations for every exposed parameter.
            pub fn describe(&self) -> Vec<String> {
                let mut lines = Vec::new();
                $(
                    if let Some(line) = self.$field.declaration() {
                        lines.push(line);
                    }
                )*
                lines
            }
        }
    };
}

define_config!(
    // Search limits
    (move_time: u64, "MoveTime", UciOptionType::Spin { min: 10, max: 600_000 }, 3000, true), // Wall-clock budget per move in ms
    (max_depth: u8, "MaxDepth", UciOptionType::Spin { min: 1, max: 64 }, 64, true),

    // Table capacities (entries)
    (hash_entries: usize, "HashEntries", UciOptionType::Spin { min: 1024, max: 50_000_000 }, 200_000, true),
    (eval_cache_entries: usize, "EvalCacheEntries", UciOptionType::Spin { min: 1024, max: 50_000_000 }, 50_000, true),
    (history_entries: usize, "HistoryEntries", UciOptionType::Spin { min: 128, max: 1_000_000 }, 10_000, true),
    (eviction_percent: usize, "EvictionPercent", UciOptionType::Spin { min: 5, max: 15 }, 10, true), // Share of entries dropped when a table fills up

    // Opening book
    (own_book: bool, "OwnBook", UciOptionType::Check, false, true),
    (book_seed: u64, "BookSeed", UciOptionType::Spin { min: 0, max: i64::MAX }, 0x0B00C, true),

    // Hashing
    (zobrist_seed: u64, "ZobristSeed", UciOptionType::Spin { min: 0, max: i64::MAX }, 0x2545_F491_4F6C_DD1D, true),

    // Time control
    (node_poll_interval: u64, "Node Poll Interval", UciOptionType::Spin { min: 1, max: 1_000_000 }, 256, cfg!(feature = "tuning")), // Nodes between clock checks

    // History Heuristic
    (history_max_value: i32, "History Max Value", UciOptionType::Spin { min: 1_000, max: 500_000 }, 50_000, cfg!(feature = "tuning")), // Must stay below the killer/capture gap

    // Late Move Reduction
    (lmr_min_depth: u8, "LMR Min Depth", UciOptionType::Spin { min: 1, max: 10 }, 3, cfg!(feature = "tuning")),
    (lmr_min_move_index: usize, "LMR Min Move Index", UciOptionType::Spin { min: 0, max: 20 }, 3, cfg!(feature = "tuning")), // Reduce moves ordered after this index
    (lmr_reduction: u8, "LMR Reduction", UciOptionType::Spin { min: 1, max: 3 }, 1, cfg!(feature = "tuning")), // Extra plies removed from reduced searches

    // Quiescence Search
    (qs_check_plies: u8, "QS Check Plies", UciOptionType::Spin { min: 0, max: 8 }, 2, cfg!(feature = "tuning")), // Checking moves are searched only this deep
    (qs_max_ply: u8, "QS Max Ply", UciOptionType::Spin { min: 1, max: 32 }, 16, cfg!(feature = "tuning")),

    // HCE Evaluation Parameters
    (hce_bishop_pair_bonus: i32, "HCE Bishop Pair Bonus", UciOptionType::Spin { min: 0, max: 150 }, 40, cfg!(feature = "tuning")),
    (hce_king_shield_bonus: i32, "HCE King Shield Bonus", UciOptionType::Spin { min: 0, max: 50 }, 10, cfg!(feature = "tuning")),
);

impl EngineConfig {
    pub fn get_piece_values(&self) -> PieceValues {
        PieceValues::default()
    }

    pub fn get_hce_config(&self) -> HCEConfig {
        HCEConfig {
            bishop_pair_bonus: self.hce_bishop_pair_bonus.value,
            king_shield_bonus: self.hce_king_shield_bonus.value,
            ..HCEConfig::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub value: T,
    pub option: Option<UciOption>,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString + Clone,
    T::Err: std::fmt::Display,
{
    pub fn update(&mut self, value: &str) -> Result<(), String> {
        let normalized = match &self.option {
            Some(meta) => {
                meta.option_type.validate(value)?;
                meta.option_type.normalize(value)
            }
            None => value.trim().to_string(),
        };

        let new_value = normalized
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;

        self.value = new_value;
        Ok(())
    }

    pub fn declaration(&self) -> Option<String> {
        let meta = self.option.as_ref()?;
        Some(meta.option_type.declaration(meta.name, &self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.move_time.value, 3000);
        assert_eq!(config.eviction_percent.value, 10);
        assert_eq!(config.node_poll_interval.value, 256);
        assert_eq!(config.lmr_min_depth.value, 3);
        assert!(!config.own_book.value);
    }

    #[test]
    fn test_set_option_validates_range() {
        let mut config = EngineConfig::default();
        config.set_option("EvictionPercent", "15").unwrap();
        assert_eq!(config.eviction_percent.value, 15);

        assert!(config.set_option("EvictionPercent", "20").is_err());
        assert!(config.set_option("EvictionPercent", "4").is_err());
        assert_eq!(config.eviction_percent.value, 15);
    }

    #[test]
    fn test_set_option_check_type() {
        let mut config = EngineConfig::default();
        config.set_option("OwnBook", "TRUE").unwrap();
        assert!(config.own_book.value);
        assert!(config.set_option("OwnBook", "maybe").is_err());
    }

    #[test]
    fn test_unknown_option() {
        let mut config = EngineConfig::default();
        let err = config.set_option("Threads", "4").unwrap_err();
        assert!(err.contains("Unknown parameter"));
    }

    #[cfg(not(feature = "tuning"))]
    #[test]
    fn test_tuning_options_hidden() {
        let mut config = EngineConfig::default();
        assert!(config.set_option("LMR Min Depth", "4").is_err());
        assert!(!config
            .describe()
            .iter()
            .any(|line| line.contains("LMR Min Depth")));
    }

    #[test]
    fn test_describe_lists_public_options() {
        let lines = EngineConfig::default().describe();
        assert!(lines.contains(&"option name MoveTime type spin default 3000 min 10 max 600000".to_string()));
        assert!(lines.contains(&"option name OwnBook type check default false".to_string()));
    }
}
