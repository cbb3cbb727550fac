//! Send command
//!
//! Fetch, render and mail the report. The mail login is only asked for
//! once there is something to send.

use anyhow::Result;

use super::{load_report, Context};
use crate::output::print_success;
use anmeldungen_core::{
    deliver_report, ChainedCredentials, MailIdentity, SmtpMailer, SmtpSettings,
};

pub async fn execute(ctx: &Context) -> Result<()> {
    let credentials = ChainedCredentials::interactive();
    let report = load_report(ctx, &credentials).await?;

    let smtp = SmtpSettings::resolve(&ctx.mail_server, ctx.mail_port, &credentials)?;
    let mailer = SmtpMailer::new(&smtp)?;
    let identity = MailIdentity::default();

    let summary = deliver_report(&report, &identity, &mailer).await?;

    print_success(
        &format!(
            "Sent {} ({} registrations) to {}",
            identity.attachment_name,
            summary.participants,
            identity.recipients.join(", ")
        ),
        ctx.quiet,
    );
    Ok(())
}
