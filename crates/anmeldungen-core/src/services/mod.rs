//! Services module

pub mod mail;
pub mod participants;
pub mod pipeline;
pub mod report;

pub use mail::{compose_message, MailTransport, SmtpMailer};
pub use participants::{ParticipantClient, ParticipantSource};
pub use pipeline::{deliver_report, fetch_report, DeliverySummary};
pub use report::{column_widths, Report};
