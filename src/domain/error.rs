//! Error types for preset resolution and filter configuration.

/// Error type for all fallible operations in the filter domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// The selected value is not a number, or not a preset offered by the
    /// active profile.
    #[error("invalid preset: {value:?}")]
    InvalidPreset {
        /// The rejected value, as received.
        value: String,
    },

    /// The filter configuration is inconsistent; detected when it is built.
    #[error("misconfiguration: {0}")]
    Misconfiguration(String),

    /// Calendar arithmetic left the range chrono can represent.
    #[error("date out of range while resolving preset {preset}")]
    DateOutOfRange {
        /// Preset being resolved when the overflow happened.
        preset: u8,
    },
}

impl FilterError {
    pub fn invalid_preset(value: impl ToString) -> Self {
        Self::InvalidPreset {
            value: value.to_string(),
        }
    }

    pub fn misconfiguration(message: impl Into<String>) -> Self {
        Self::Misconfiguration(message.into())
    }
}
