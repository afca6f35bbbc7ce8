//! Error types for map setup.

use thiserror::Error;

/// Result type alias using [`MapError`].
pub type Result<T> = std::result::Result<T, MapError>;

/// Everything that can stop a map from being generated.
///
/// The belt pipeline itself is total; failures come from bad settings or
/// from the growth loop running past its round cap.
#[derive(Debug, Error)]
pub enum MapError {
    /// Settings failed validation.
    #[error("Invalid map settings: {0}")]
    InvalidSettings(String),

    /// Settings document could not be parsed.
    #[error("Failed to parse map settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Asteroid growth did not settle within the allowed number of rounds.
    #[error("Asteroid growth did not settle after {rounds} rounds")]
    GrowthStalled {
        /// Rounds run before giving up.
        rounds: usize,
    },
}
