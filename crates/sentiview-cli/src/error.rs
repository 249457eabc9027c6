use thiserror::Error;

use sentiview_core::CoreError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] sentiview_core::ValidationError),

    #[error("fixture load failed: {0}")]
    Fixtures(#[from] CoreError),

    #[error("command error: {0}")]
    Command(String),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Command(_) => 2,
            Self::Fixtures(CoreError::Validation(_)) => 2,
            Self::Fixtures(CoreError::Serialization(_)) | Self::Serialization(_) => 4,
            Self::StrictModeViolation { .. } => 5,
            Self::Logging(_) | Self::Io(_) => 10,
        }
    }
}
