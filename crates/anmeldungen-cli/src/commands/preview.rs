//! Preview command
//!
//! Print the report rows to the terminal.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use super::{load_report, Context};
use crate::output::print_rows;
use anmeldungen_core::{ChainedCredentials, ReportRow};

/// Report row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct PreviewRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Bestätigt")]
    pub confirmed: bool,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Festkolloquium")]
    pub ceremony: bool,
    #[tabled(rename = "Festessen")]
    pub dinner: bool,
    #[tabled(rename = "Begl. Fr")]
    pub dinner_guests: u32,
    #[tabled(rename = "BuB")]
    pub bread_and_tour: bool,
    #[tabled(rename = "Grillen")]
    pub bbq_and_lab_tour: bool,
    #[tabled(rename = "Begl. Sa")]
    pub saturday_guests: u32,
    #[tabled(rename = "Essen (Antwort)")]
    pub dinner_answer: bool,
    #[tabled(rename = "Begl. Fr (Antwort)")]
    pub friday_guest_answer: bool,
}

impl From<&ReportRow> for PreviewRow {
    fn from(row: &ReportRow) -> Self {
        Self {
            name: row.name.clone(),
            confirmed: row.confirmed,
            email: row.email.clone(),
            ceremony: row.ceremony,
            dinner: row.dinner,
            dinner_guests: row.dinner_guests,
            bread_and_tour: row.bread_and_tour,
            bbq_and_lab_tour: row.bbq_and_lab_tour,
            saturday_guests: row.saturday_guests,
            dinner_answer: row.dinner_answer,
            friday_guest_answer: row.friday_guest_answer,
        }
    }
}

pub async fn execute(ctx: &Context) -> Result<()> {
    let report = load_report(ctx, &ChainedCredentials::interactive()).await?;

    let rows: Vec<PreviewRow> = report.rows.iter().map(PreviewRow::from).collect();
    print_rows(&report.title, &rows, ctx.format, ctx.quiet)
}
