//! Unified error handling for anmeldungen-core

use thiserror::Error;

/// Core error type for anmeldungen-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Registration API error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No registrations yet")]
    EmptyResult,

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Mail composition error: {0}")]
    MailBuild(#[from] lettre::error::Error),

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Mail transport error: {0}")]
    MailTransport(#[from] lettre::transport::smtp::Error),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for anmeldungen-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a credential error
    pub fn credential(msg: impl Into<String>) -> Self {
        Error::Credential(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// HTTP status of a failed fetch, if the server answered at all
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, Error::EmptyResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::credential("PEP_PASSWORD not set");
        assert_eq!(err.to_string(), "Credential error: PEP_PASSWORD not set");
    }

    #[test]
    fn test_status_error_exposes_code() {
        let err = Error::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
        assert!(err.to_string().contains("401"));
        assert!(!err.is_empty_result());
    }

    #[test]
    fn test_empty_result() {
        assert!(Error::EmptyResult.is_empty_result());
        assert_eq!(Error::EmptyResult.status(), None);
    }
}
