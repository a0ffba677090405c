use starfall_core::config::ConfigError;

/// Errors that end the program before or instead of a run.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Bad command line; the message names the offending argument.
    #[error("Usage error: {0}")]
    Usage(String),
}
