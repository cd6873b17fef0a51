use lottie_schema::Direction;
use serde::{Deserialize, Serialize};

/// Settings for one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Keep supplementary keys under an `extra` object instead of dropping them.
    pub include_extra: bool,
    pub direction: Direction,
}

impl ConvertOptions {
    pub fn forward(include_extra: bool) -> Self {
        Self {
            include_extra,
            direction: Direction::Forward,
        }
    }

    pub fn reverse(include_extra: bool) -> Self {
        Self {
            include_extra,
            direction: Direction::Reverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ConvertOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ConvertOptions::forward(false));

        let options: ConvertOptions =
            serde_json::from_str(r#"{"includeExtra": true, "direction": "reverse"}"#).unwrap();
        assert_eq!(options, ConvertOptions::reverse(true));
    }
}
