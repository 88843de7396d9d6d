//! Shared error type across sample-app crates.

use thiserror::Error;

/// Stable error codes, used in logs and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config file rejected (parse or validation).
    BadConfig,
    /// Filesystem or socket failure.
    Io,
    /// Anything else.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SampleAppError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SampleAppError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SampleAppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SampleAppError::BadConfig(_) => ErrorCode::BadConfig,
            SampleAppError::Io(_) => ErrorCode::Io,
            SampleAppError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<std::io::Error> for SampleAppError {
    fn from(e: std::io::Error) -> Self {
        SampleAppError::Io(e.to_string())
    }
}
