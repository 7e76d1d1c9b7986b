/// Metadata for a tunable engine parameter, exposed under a UCI-style name.
#[derive(Debug, Clone)]
pub struct UciOption {
    pub name: &'static str,
    pub option_type: UciOptionType,
}

#[derive(Debug, Clone)]
pub enum UciOptionType {
    Spin { min: i64, max: i64 },
    Check,
}

impl UciOptionType {
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            UciOptionType::Spin { min, max } => {
                let parsed = value
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| format!("Invalid integer: {}", e))?;
                if parsed < *min || parsed > *max {
                    return Err(format!("Value {} out of range [{}, {}]", parsed, min, max));
                }
                Ok(())
            }
            UciOptionType::Check => match value.trim().to_lowercase().as_str() {
                "true" | "false" => Ok(()),
                _ => Err("Boolean value must be 'true' or 'false'".to_string()),
            },
        }
    }

    /// Canonical textual value, ready for `FromStr` on the target type.
    pub fn normalize(&self, value: &str) -> String {
        match self {
            UciOptionType::Spin { .. } => value.trim().to_string(),
            UciOptionType::Check => value.trim().to_lowercase(),
        }
    }

    /// Renders the `option name ...` declaration line for this parameter.
    pub fn declaration<T>(&self, name: &str, current_value: &T) -> String
    where
        T: ToString,
    {
        match self {
            UciOptionType::Spin { min, max } => {
                format!(
                    "option name {} type spin default {} min {} max {}",
                    name,
                    current_value.to_string(),
                    min,
                    max
                )
            }
            UciOptionType::Check => {
                format!(
                    "option name {} type check default {}",
                    name,
                    current_value.to_string()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_validation() {
        let spin = UciOptionType::Spin { min: 5, max: 15 };
        assert!(spin.validate("10").is_ok());
        assert!(spin.validate(" 5 ").is_ok());
        assert!(spin.validate("4").is_err());
        assert!(spin.validate("16").is_err());
        assert!(spin.validate("ten").is_err());
    }

    #[test]
    fn test_check_validation() {
        assert!(UciOptionType::Check.validate("TRUE").is_ok());
        assert!(UciOptionType::Check.validate("false").is_ok());
        assert!(UciOptionType::Check.validate("yes").is_err());
        assert_eq!(UciOptionType::Check.normalize(" True "), "true");
    }

    #[test]
    fn test_declaration() {
        let spin = UciOptionType::Spin { min: 1, max: 100 };
        assert_eq!(
            spin.declaration("Max Depth", &64),
            "option name Max Depth type spin default 64 min 1 max 100"
        );
        assert_eq!(
            UciOptionType::Check.declaration("OwnBook", &false),
            "option name OwnBook type check default false"
        );
    }
}
