//! Excel report
//!
//! Turns registration records into the one-sheet workbook the Dekanat
//! receives: a merged title row, a bold header row and one row per
//! registration.

use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{CellValue, RegistrationRecord, ReportRow, COLUMN_HEADERS};

pub const SHEET_NAME: &str = "Anmeldungen 50 Jahre Physik";
const TITLE_PREFIX: &str = "Anmeldungen 50 Jahre Physik, Stand";
const FONT_NAME: &str = "Cambria";
const HEADER_WIDTH_FACTOR: f64 = 1.1;

/// Rows 1 and 2 hold the title and the headers
pub const HEADER_ROWS: usize = 2;

/// A built report, ready to be rendered
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub rows: Vec<ReportRow>,
    pub column_widths: Vec<f64>,
}

impl Report {
    /// Build the report for `records`, stamped with `generated_at`.
    ///
    /// Fails with [`Error::EmptyResult`] when there is nothing to report.
    pub fn build(records: &[RegistrationRecord], generated_at: DateTime<Tz>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyResult);
        }

        let rows: Vec<ReportRow> = records.iter().map(ReportRow::from).collect();
        let column_widths = column_widths(&rows);
        let title = format!(
            "{} {}",
            TITLE_PREFIX,
            generated_at.to_rfc3339_opts(SecondsFormat::Micros, false)
        );

        log::debug!("[report] Built {} rows", rows.len());
        Ok(Self {
            title,
            rows,
            column_widths,
        })
    }

    /// Spreadsheet rows including title and header
    pub fn row_count(&self) -> usize {
        self.rows.len() + HEADER_ROWS
    }

    pub fn confirmed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.confirmed).count()
    }

    /// Render the workbook into memory
    pub fn to_xlsx(&self) -> Result<Vec<u8>> {
        let mut workbook = self.render()?;
        let buffer = workbook.save_to_buffer()?;
        log::info!("[report] Rendered {} bytes", buffer.len());
        Ok(buffer)
    }

    /// Render the workbook to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = self.render()?;
        workbook.save(path)?;
        Ok(())
    }

    fn render(&self) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold().set_font_name(FONT_NAME);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let last_col = (COLUMN_HEADERS.len() - 1) as u16;
        worksheet.merge_range(0, 0, 0, last_col, &self.title, &bold)?;

        for (col, header) in COLUMN_HEADERS.iter().enumerate() {
            worksheet.write_with_format(1, col as u16, *header, &bold)?;
        }

        for (idx, row) in self.rows.iter().enumerate() {
            let row_num = (HEADER_ROWS + idx) as u32;
            for (col, cell) in row.cells().iter().enumerate() {
                write_cell(worksheet, row_num, col as u16, cell)?;
            }
        }

        for (col, width) in self.column_widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }

        Ok(workbook)
    }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> Result<()> {
    match cell {
        CellValue::Text(s) => worksheet.write_string(row, col, s)?,
        CellValue::Bool(b) => worksheet.write_boolean(row, col, *b)?,
        CellValue::Number(n) => worksheet.write_number(row, col, f64::from(*n))?,
    };
    Ok(())
}

/// Per column: the larger of 1.1 × header length and the longest cell text,
/// counted in characters.
pub fn column_widths(rows: &[ReportRow]) -> Vec<f64> {
    let mut widths: Vec<f64> = COLUMN_HEADERS
        .iter()
        .map(|h| HEADER_WIDTH_FACTOR * h.chars().count() as f64)
        .collect();

    for row in rows {
        for (col, cell) in row.cells().iter().enumerate() {
            let len = cell.to_string().chars().count() as f64;
            if len > widths[col] {
                widths[col] = len;
            }
        }
    }

    widths
}
