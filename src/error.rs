use std::path::PathBuf;

use crate::record::RecordKind;

pub type DnsResult<T> = Result<T, DnsError>;

/// Failures of a single browser step (open, follow, submit).
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    #[error("link not found: {0}")]
    LinkNotFound(String),

    #[error("form not found: {0}")]
    FormNotFound(String),

    #[error("form control not found: {0}")]
    ControlNotFound(String),

    #[error("control '{control}' has no option '{value}'")]
    OptionNotFound { control: String, value: String },

    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("no page loaded")]
    NoPage,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// An add or remove submission that did not complete.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("failed to add {0}-record")]
    Add(RecordKind, #[source] BrowseError),

    #[error("failed to remove {0}-record")]
    Remove(RecordKind, #[source] BrowseError),
}

#[derive(Debug, thiserror::Error)]
pub enum DnsError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("navigation failed")]
    Navigation(#[from] BrowseError),

    #[error("config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl DnsError {
    pub fn invalid(message: &str) -> Self {
        Self::InvalidArgument(message.to_string())
    }
}
