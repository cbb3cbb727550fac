//! # anmeldungen-core
//!
//! Core logic for Anmeldungen - shared by the CLI and the tests.
//!
//! This crate provides:
//! - Registration data models (`models` module)
//! - Run configuration and credential lookup (`config`, `credentials`)
//! - Fetching, report building and mailing (`services` module)
//! - Unified error handling (`error` module)

pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use utils::berlin_now;

// Re-exports for convenience
pub use config::{MailIdentity, RegistrationSettings, SmtpSettings};
pub use credentials::{
    ChainedCredentials, CredentialKey, CredentialSource, EnvCredentials, PromptCredentials,
    StaticCredentials,
};
pub use error::{Error, Result};

pub use models::{CellValue, RegistrationRecord, ReportRow, COLUMN_HEADERS};

pub use services::{
    compose_message, deliver_report, fetch_report, DeliverySummary, MailTransport,
    ParticipantClient, ParticipantSource, Report, SmtpMailer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
