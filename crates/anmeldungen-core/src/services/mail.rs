//! Report mail
//!
//! Composes the multipart message carrying the spreadsheet and sends it
//! over SMTP with implicit TLS.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;

use crate::config::{MailIdentity, SmtpSettings};
use crate::error::{Error, Result};

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Something that delivers a finished message
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: Message) -> Result<()>;
}

/// Build the report mail with `attachment` as the spreadsheet
pub fn compose_message(identity: &MailIdentity, attachment: Vec<u8>) -> Result<Message> {
    let mut builder = Message::builder()
        .from(identity.from.parse::<Mailbox>()?)
        .reply_to(identity.reply_to.parse::<Mailbox>()?)
        .subject(identity.subject.clone())
        .date_now();

    for recipient in &identity.recipients {
        builder = builder.to(recipient.parse::<Mailbox>()?);
    }

    let content_type = ContentType::parse(XLSX_CONTENT_TYPE)
        .map_err(|e| Error::config(format!("invalid attachment content type: {}", e)))?;
    let attachment = Attachment::new(identity.attachment_name.clone()).body(attachment, content_type);

    let message = builder.multipart(
        MultiPart::mixed()
            .singlepart(SinglePart::plain(identity.body.clone()))
            .singlepart(attachment),
    )?;

    Ok(message)
}

/// Authenticated SMTP submission (SMTPS)
pub struct SmtpMailer {
    host: String,
    port: u16,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Prepare the transport. No connection is opened until [`MailTransport::send`].
    pub fn new(settings: &SmtpSettings) -> Result<Self> {
        let credentials = Credentials::new(settings.username.clone(), settings.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
            .port(settings.port)
            .credentials(credentials)
            .timeout(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
            .build();

        Ok(Self {
            host: settings.host.clone(),
            port: settings.port,
            transport,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, message: Message) -> Result<()> {
        log::info!("[mail] Connecting to {}:{}", self.host, self.port);
        let response = self.transport.send(message).await?;
        log::info!("[mail] Message sent ({})", response.code());
        Ok(())
    }
}
