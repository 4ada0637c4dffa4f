//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and execution.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Board construction failed.
    #[error("board error: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: lifegrid_core::BoardError,
    },

    /// The configured starting pattern is not in the pattern library.
    #[error("unknown starting pattern: {name}")]
    UnknownPattern {
        /// The pattern name that failed to resolve.
        name: String,
    },
}
