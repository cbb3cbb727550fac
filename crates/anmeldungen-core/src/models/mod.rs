//! Data models for Anmeldungen

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status string the registration service uses for finalized registrations
pub const STATUS_CONFIRMED: &str = "confirmed";

/// Column headers of the report, in spreadsheet order
pub const COLUMN_HEADERS: [&str; 9] = [
    "Name",
    "Anmeldng bestätigt",
    "Email",
    "Festkolloquium",
    "Festessen",
    "Begleitung Festessen",
    "Brötchen und Borussia",
    "Alumnigrillen & Laborführungen",
    "Anzahl Begleitpersonen",
];

/// Response body of `GET /events/{event}/participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantsResponse {
    pub participants: Vec<RegistrationRecord>,
}

/// One person's submitted registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub data: RegistrationData,
    pub status_name: String,
}

impl RegistrationRecord {
    /// Exact, case-sensitive match on the status string
    pub fn is_confirmed(&self) -> bool {
        self.status_name == STATUS_CONFIRMED
    }
}

/// Form answers of a registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    #[serde(rename = "freitag")]
    pub friday: FridayAnswers,
    #[serde(rename = "samstag")]
    pub saturday: SaturdayAnswers,
}

/// Friday programme: ceremony and dinner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FridayAnswers {
    #[serde(rename = "symp")]
    pub attending_ceremony: bool,
    #[serde(default)]
    pub dinner: bool,
    #[serde(rename = "begleitung_freitag", default)]
    pub bringing_guest: bool,
}

/// Saturday programme: breakfast tour, BBQ with lab tours, guests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaturdayAnswers {
    #[serde(rename = "BuB")]
    pub bread_and_tour: bool,
    #[serde(rename = "bbq")]
    pub bbq_and_lab_tour: bool,
    #[serde(rename = "begleitung_samstag")]
    pub guest_count: u32,
}

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Bool(bool),
    Number(u32),
}

/// Booleans print as `True`/`False`; column widths are measured on this form.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One flattened report row, derived from a [`RegistrationRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub confirmed: bool,
    pub email: String,
    pub ceremony: bool,
    pub dinner: bool,
    pub dinner_guests: u32,
    pub bread_and_tour: bool,
    pub bbq_and_lab_tour: bool,
    pub saturday_guests: u32,
    /// Friday dinner answer as submitted; not written to the sheet
    pub dinner_answer: bool,
    /// Friday guest answer as submitted; not written to the sheet
    pub friday_guest_answer: bool,
}

impl From<&RegistrationRecord> for ReportRow {
    // Festessen and Begleitung Festessen both read `symp`; the dinner and
    // guest answers of the form only travel along for display.
    fn from(record: &RegistrationRecord) -> Self {
        let friday = &record.data.friday;
        let saturday = &record.data.saturday;
        Self {
            name: record.data.name.clone(),
            confirmed: record.is_confirmed(),
            email: record.data.email.clone(),
            ceremony: friday.attending_ceremony,
            dinner: friday.attending_ceremony,
            dinner_guests: u32::from(friday.attending_ceremony),
            bread_and_tour: saturday.bread_and_tour,
            bbq_and_lab_tour: saturday.bbq_and_lab_tour,
            saturday_guests: saturday.guest_count,
            dinner_answer: friday.dinner,
            friday_guest_answer: friday.bringing_guest,
        }
    }
}

impl ReportRow {
    /// Cells in [`COLUMN_HEADERS`] order
    pub fn cells(&self) -> [CellValue; 9] {
        [
            CellValue::Text(self.name.clone()),
            CellValue::Bool(self.confirmed),
            CellValue::Text(self.email.clone()),
            CellValue::Bool(self.ceremony),
            CellValue::Bool(self.dinner),
            CellValue::Number(self.dinner_guests),
            CellValue::Bool(self.bread_and_tour),
            CellValue::Bool(self.bbq_and_lab_tour),
            CellValue::Number(self.saturday_guests),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JANE: &str = r#"{
        "data": {
            "name": "Jane Doe",
            "email": "j@x.de",
            "freitag": {"symp": true},
            "samstag": {"BuB": false, "bbq": true, "begleitung_samstag": 2}
        },
        "status_name": "confirmed"
    }"#;

    fn record(json: &str) -> RegistrationRecord {
        serde_json::from_str(json).unwrap()
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    #[test]
    fn test_decode_minimal_friday() {
        let r = record(JANE);
        assert!(r.data.friday.attending_ceremony);
        assert!(!r.data.friday.dinner);
        assert!(!r.data.friday.bringing_guest);
        assert_eq!(r.data.saturday.guest_count, 2);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let r = record(
            r#"{
                "id": 17,
                "data": {
                    "name": "Hannes",
                    "email": "h@example.org",
                    "freitag": {"begleitung_freitag": false, "dinner": true, "symp": true},
                    "samstag": {"BuB": true, "bbq": false, "begleitung_samstag": 0},
                    "submit": true
                },
                "status_name": "pending"
            }"#,
        );
        assert!(r.data.friday.dinner);
        assert!(!r.is_confirmed());
    }

    #[test]
    fn test_decode_missing_saturday_fails() {
        let result: Result<RegistrationRecord, _> = serde_json::from_str(
            r#"{"data": {"name": "X", "email": "x@y", "freitag": {"symp": true}}, "status_name": "confirmed"}"#,
        );
        assert!(result.is_err());
    }

    // ========================================================================
    // Row mapping
    // ========================================================================

    #[test]
    fn test_row_from_scenario_record() {
        let row = ReportRow::from(&record(JANE));
        assert_eq!(
            row,
            ReportRow {
                name: "Jane Doe".to_string(),
                confirmed: true,
                email: "j@x.de".to_string(),
                ceremony: true,
                dinner: true,
                dinner_guests: 1,
                bread_and_tour: false,
                bbq_and_lab_tour: true,
                saturday_guests: 2,
                dinner_answer: false,
                friday_guest_answer: false,
            }
        );
    }

    #[test]
    fn test_dinner_mirrors_ceremony() {
        // dinner answer is true but the ceremony flag decides
        let r = record(
            r#"{"data": {"name": "A", "email": "a@b",
                "freitag": {"symp": false, "dinner": true, "begleitung_freitag": true},
                "samstag": {"BuB": true, "bbq": true, "begleitung_samstag": 0}},
                "status_name": "confirmed"}"#,
        );
        let row = ReportRow::from(&r);
        assert_eq!(row.ceremony, row.dinner);
        assert!(!row.dinner);
        assert_eq!(row.dinner_guests, 0);
    }

    #[test]
    fn test_raw_friday_answers_kept_off_sheet() {
        let r = record(
            r#"{"data": {"name": "A", "email": "a@b",
                "freitag": {"symp": true, "dinner": false, "begleitung_freitag": true},
                "samstag": {"BuB": false, "bbq": false, "begleitung_samstag": 0}},
                "status_name": "confirmed"}"#,
        );
        let row = ReportRow::from(&r);
        assert!(row.dinner);
        assert!(!row.dinner_answer);
        assert!(row.friday_guest_answer);
        assert_eq!(row.cells()[4], CellValue::Bool(true));
    }

    #[test]
    fn test_confirmed_is_exact_match() {
        for (status, expected) in [
            ("confirmed", true),
            ("Confirmed", false),
            ("confirmed ", false),
            ("pending", false),
            ("", false),
        ] {
            let mut r = record(JANE);
            r.status_name = status.to_string();
            assert_eq!(ReportRow::from(&r).confirmed, expected, "status {:?}", status);
        }
    }

    #[test]
    fn test_cells_follow_header_order() {
        let cells = ReportRow::from(&record(JANE)).cells();
        assert_eq!(cells.len(), COLUMN_HEADERS.len());
        assert_eq!(cells[0], CellValue::Text("Jane Doe".to_string()));
        assert_eq!(cells[2], CellValue::Text("j@x.de".to_string()));
        assert_eq!(cells[5], CellValue::Number(1));
        assert_eq!(cells[8], CellValue::Number(2));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Bool(false).to_string(), "False");
        assert_eq!(CellValue::Number(12).to_string(), "12");
        assert_eq!(CellValue::Text("Zoë".to_string()).to_string(), "Zoë");
    }
}
