//! Error types for glide-core.

use thiserror::Error;

/// Errors raised while loading or validating a [`GlideConfig`].
///
/// [`GlideConfig`]: crate::GlideConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration JSON could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// One key is bound to two different actions.
    #[error("key {key:?} is bound to both {first} and {second}")]
    DuplicateKey {
        key: String,
        first: &'static str,
        second: &'static str,
    },

    /// An action has no keys bound.
    #[error("no keys bound for {0}")]
    EmptyBinding(&'static str),

    /// A numeric field is outside its allowed range.
    #[error("{field} = {value} is out of range ({expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// A direction name other than `up`, `down`, `left` or `right`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction {0:?}")]
pub struct UnknownDirection(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_json() {
        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid config JSON"));
    }

    #[test]
    fn test_duplicate_key_message() {
        let err = ConfigError::DuplicateKey {
            key: "ArrowUp".into(),
            first: "up",
            second: "back",
        };
        assert_eq!(
            err.to_string(),
            "key \"ArrowUp\" is bound to both up and back"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ConfigError::OutOfRange {
            field: "transition_ms",
            value: 0.0,
            expected: "> 0",
        };
        assert_eq!(err.to_string(), "transition_ms = 0 is out of range (> 0)");
    }
}
