use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid report options: {0}")]
    InvalidOptions(String),

    #[error(
        "options version {found} is newer than this build supports ({supported})"
    )]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
