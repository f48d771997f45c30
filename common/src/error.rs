use thiserror::Error;

/// All possible process level errors of the AttendeeManager applications
#[derive(Error, Debug)]
pub enum AmError {
    #[error("Environment variable `{key}` could not be read\n{source}")]
    EnvVar {
        key: &'static str,
        source: std::env::VarError,
    },
    #[error("Environment variable `{key}` has an invalid value. {reason}")]
    InvalidConfig { key: &'static str, reason: String },
    #[error("Could not start logging\n{0}")]
    Logging(String),
    #[error("IO error\n{0}")]
    Io(#[from] std::io::Error),
}

/// Generic [Result][std::result::Result] type where the error is always [AmError]
pub type AmResult<T> = std::result::Result<T, AmError>;
