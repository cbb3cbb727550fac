//! CLI commands module
//!
//! `send` is the scheduled job; `export` and `preview` are for checking
//! the report by hand.

pub mod export;
pub mod preview;
pub mod send;

use anyhow::Result;

use crate::output::OutputFormat;
use anmeldungen_core::{
    berlin_now, fetch_report, CredentialSource, ParticipantClient, RegistrationSettings, Report,
};

/// Shared context for all commands
pub struct Context {
    pub base_url: String,
    pub event: String,
    pub mail_server: String,
    pub mail_port: u16,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Resolve the API login, fetch the registrations and build the report
pub async fn load_report(ctx: &Context, credentials: &dyn CredentialSource) -> Result<Report> {
    let settings = RegistrationSettings::resolve(&ctx.base_url, &ctx.event, credentials)?;
    let client = ParticipantClient::new(&settings)?;

    log::info!("Fetching registrations for {}", ctx.event);
    let report = fetch_report(&client, berlin_now()).await?;
    log::info!(
        "{} registrations, {} confirmed",
        report.rows.len(),
        report.confirmed_count()
    );

    Ok(report)
}
