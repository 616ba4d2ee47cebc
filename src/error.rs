//! Error types for roboline.

use thiserror::Error;

/// Which collection a lookup targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Phase,
    Resource,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phase => "phase",
            Self::Resource => "resource",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("content parse error: {0}")]
    ContentParse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SiteError {
    /// Stable machine-readable code for robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidContent(_) => "invalid_content",
            Self::ContentParse(_) => "content_parse",
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }

    /// Process exit status, loosely following `sysexits.h`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 2,
            Self::InvalidContent(_) | Self::ContentParse(_) | Self::ValidationFailed(_) => 65,
            Self::MissingConfig(_) => 66,
            Self::Serialization(_) => 70,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// Next step to suggest alongside the message.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { kind: RecordKind::Phase, .. } => Some("run `roboline list phases` for valid ids"),
            Self::NotFound { kind: RecordKind::Resource, .. } => {
                Some("run `roboline list resources` for valid ids")
            }
            Self::InvalidContent(_) | Self::ContentParse(_) => {
                Some("`roboline check` lists every content problem")
            }
            Self::Config(_) | Self::MissingConfig(_) => {
                Some("run `roboline config` to see the effective settings")
            }
            Self::ValidationFailed(_) | Self::Serialization(_) | Self::Io(_) => None,
        }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
