use thiserror::Error;

/// Error types for dialect translation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    /// The dialect selector did not name a known dialect
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
    /// A substitution rule or grammar pattern could not be built
    #[error("Invalid rule: {0}")]
    InvalidRule(String),
    /// The engine for a dialect failed to build and cannot translate
    #[error("Engine unavailable: {0}")]
    EngineUnavailable(String),
    /// Error raised while translating under one dialect
    #[error("Translation error: {0}")]
    TranslationError(String),
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(String),
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for dialect operations
pub type DialectResult<T> = Result<T, DialectError>;
