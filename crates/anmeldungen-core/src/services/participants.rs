//! Registration API client
//!
//! Fetches the participant list of one event with a single
//! basic-auth GET. No retries, no pagination.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{header, Client};

use crate::config::RegistrationSettings;
use crate::error::{Error, Result};
use crate::models::{ParticipantsResponse, RegistrationRecord};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Anything that can hand out the current registrations
#[async_trait]
pub trait ParticipantSource: Send + Sync {
    async fn fetch_participants(&self) -> Result<Vec<RegistrationRecord>>;
}

/// HTTP client for `registration.pep-dortmund.org`
pub struct ParticipantClient {
    url: String,
    client: Client,
}

impl ParticipantClient {
    pub fn new(settings: &RegistrationSettings) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let credentials = format!("{}:{}", settings.username, settings.password);
        let mut auth_value =
            header::HeaderValue::from_str(&format!("Basic {}", BASE64.encode(credentials)))
                .map_err(|e| Error::credential(format!("invalid characters in credentials: {}", e)))?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            url: settings.participants_url(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ParticipantSource for ParticipantClient {
    async fn fetch_participants(&self) -> Result<Vec<RegistrationRecord>> {
        log::info!("[participants] GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!("[participants] Registration API answered {}", status);
            return Err(Error::Status { status, body });
        }

        let body: ParticipantsResponse = response.json().await?;
        log::debug!("[participants] Received {} records", body.participants.len());
        Ok(body.participants)
    }
}
