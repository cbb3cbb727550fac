//! Run steps
//!
//! fetch → build → render → mail. Each step is its own function so the
//! CLI can resolve the mail login only once a report exists.

use chrono::DateTime;
use chrono_tz::Tz;

use super::mail::{compose_message, MailTransport};
use super::participants::ParticipantSource;
use super::report::Report;
use crate::config::MailIdentity;
use crate::error::{Error, Result};

/// What a finished send run delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySummary {
    pub participants: usize,
    pub confirmed: usize,
    pub recipients: usize,
    pub attachment_bytes: usize,
}

/// Fetch the registrations and build the report.
///
/// An empty participant list stops here with [`Error::EmptyResult`].
pub async fn fetch_report<S>(source: &S, generated_at: DateTime<Tz>) -> Result<Report>
where
    S: ParticipantSource + ?Sized,
{
    let records = source.fetch_participants().await?;
    if records.is_empty() {
        log::warn!("[participants] No registrations returned");
        return Err(Error::EmptyResult);
    }

    Report::build(&records, generated_at)
}

/// Render `report` and mail it to the recipients of `identity`
pub async fn deliver_report<M>(
    report: &Report,
    identity: &MailIdentity,
    transport: &M,
) -> Result<DeliverySummary>
where
    M: MailTransport + ?Sized,
{
    let buffer = report.to_xlsx()?;
    let attachment_bytes = buffer.len();
    let message = compose_message(identity, buffer)?;

    transport.send(message).await?;

    Ok(DeliverySummary {
        participants: report.rows.len(),
        confirmed: report.confirmed_count(),
        recipients: identity.recipients.len(),
        attachment_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FridayAnswers, RegistrationData, RegistrationRecord, SaturdayAnswers};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use chrono_tz::Europe::Berlin;
    use lettre::Message;
    use std::sync::Mutex;

    struct StaticSource(Vec<RegistrationRecord>);

    #[async_trait]
    impl ParticipantSource for StaticSource {
        async fn fetch_participants(&self) -> Result<Vec<RegistrationRecord>> {
            Ok(self.0.clone())
        }
    }

    /// Refuses every message, counting the attempts
    #[derive(Default)]
    struct RefusingTransport {
        attempts: Mutex<usize>,
    }

    #[async_trait]
    impl MailTransport for RefusingTransport {
        async fn send(&self, _message: Message) -> Result<()> {
            *self.attempts.lock().unwrap() += 1;
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "relay refused",
            )))
        }
    }

    fn record(name: &str) -> RegistrationRecord {
        RegistrationRecord {
            data: RegistrationData {
                name: name.to_string(),
                email: format!("{}@x.de", name.to_lowercase()),
                friday: FridayAnswers::default(),
                saturday: SaturdayAnswers::default(),
            },
            status_name: "confirmed".to_string(),
        }
    }

    fn stamp() -> DateTime<Tz> {
        Berlin.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_report_empty_source() {
        let err = fetch_report(&StaticSource(Vec::new()), stamp()).await.unwrap_err();
        assert!(err.is_empty_result());
    }

    #[tokio::test]
    async fn test_fetch_report_keeps_order() {
        let source = StaticSource(vec![record("Berta"), record("Anton")]);
        let report = fetch_report(&source, stamp()).await.unwrap();
        assert_eq!(report.rows[0].name, "Berta");
        assert_eq!(report.rows[1].name, "Anton");
    }

    #[tokio::test]
    async fn test_deliver_report_propagates_transport_error() {
        let report = Report::build(&[record("Anton")], stamp()).unwrap();
        let transport = RefusingTransport::default();

        let err = deliver_report(&report, &MailIdentity::default(), &transport)
            .await
            .unwrap_err();

        assert!(matches!(&err, Error::Io(e) if e.kind() == std::io::ErrorKind::ConnectionRefused));
        assert_eq!(*transport.attempts.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_deliver_report_bad_identity_never_sends() {
        let report = Report::build(&[record("Anton")], stamp()).unwrap();
        let identity = MailIdentity {
            recipients: vec!["not an address".to_string()],
            ..MailIdentity::default()
        };
        let transport = RefusingTransport::default();

        let err = deliver_report(&report, &identity, &transport).await.unwrap_err();

        assert!(matches!(err, Error::Address(_)));
        assert_eq!(*transport.attempts.lock().unwrap(), 0);
    }
}
