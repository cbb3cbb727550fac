//! Run configuration
//!
//! Non-secret settings (URLs, host, port) come from the caller, usually
//! clap flags backed by environment variables. Secrets are resolved
//! through a [`CredentialSource`].

use std::fmt;

use crate::credentials::{CredentialSource, API_PASSWORD, API_USER, MAIL_PASSWORD, MAIL_USER};
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://registration.pep-dortmund.org";
pub const DEFAULT_EVENT: &str = "physik50";
pub const DEFAULT_MAIL_SERVER: &str = "unimail.tu-dortmund.de";
pub const DEFAULT_MAIL_PORT: u16 = 465;
pub const DEFAULT_ATTACHMENT_NAME: &str = "Anmeldungen50JahrePhysik.xlsx";

const DEFAULT_BODY: &str = "
Guten Tag Liebes Dekanat,

Anbei der aktuelle Stand der Anmeldungen für die 50-Jahr-Feier.

Mit freundlichen Grüßen
Maximilian Linhoff
";

/// Where and as whom to fetch registrations
#[derive(Clone)]
pub struct RegistrationSettings {
    pub base_url: String,
    pub event: String,
    pub username: String,
    pub password: String,
}

impl RegistrationSettings {
    pub fn resolve(
        base_url: impl Into<String>,
        event: impl Into<String>,
        credentials: &dyn CredentialSource,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let event = event.into();
        if base_url.trim().is_empty() {
            return Err(Error::config("registration base URL is empty"));
        }
        if event.trim().is_empty() {
            return Err(Error::config("event identifier is empty"));
        }

        Ok(Self {
            base_url,
            event,
            username: credentials.require(&API_USER)?,
            password: credentials.require(&API_PASSWORD)?,
        })
    }

    /// `{base_url}/events/{event}/participants`
    pub fn participants_url(&self) -> String {
        format!(
            "{}/events/{}/participants",
            self.base_url.trim_end_matches('/'),
            self.event
        )
    }
}

impl fmt::Debug for RegistrationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationSettings")
            .field("base_url", &self.base_url)
            .field("event", &self.event)
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// SMTP submission endpoint and login
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl SmtpSettings {
    pub fn resolve(
        host: impl Into<String>,
        port: u16,
        credentials: &dyn CredentialSource,
    ) -> Result<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(Error::config("mail server host is empty"));
        }

        Ok(Self {
            host,
            port,
            username: credentials.require(&MAIL_USER)?,
            password: credentials.require(&MAIL_PASSWORD)?,
        })
    }
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Who sends the report to whom, and what the mail says
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailIdentity {
    pub from: String,
    pub reply_to: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
}

impl Default for MailIdentity {
    fn default() -> Self {
        Self {
            from: "PeP et al. e.V. <no-reply@pep-dortmund.org>".to_string(),
            reply_to: "Maximilian Linhoff <maximilian.linhoff@tu-dortmund.de>".to_string(),
            recipients: vec![
                "dekanat.physik@tu-dortmund.de".to_string(),
                "maximilian.linhoff@tu-dortmund.de".to_string(),
            ],
            subject: "Update Anmeldungen 50-Jahr-Feier".to_string(),
            body: DEFAULT_BODY.to_string(),
            attachment_name: DEFAULT_ATTACHMENT_NAME.to_string(),
        }
    }
}
