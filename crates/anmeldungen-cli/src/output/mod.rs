//! Terminal output
//!
//! The preview prints the report title over a table of rows, or the bare
//! rows as JSON so the output can be piped.

use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}. Use 'table' or 'json'", s)),
        }
    }
}

/// Render report rows. The title heads the table and never enters JSON.
pub fn render_rows<T>(title: Option<&str>, rows: &[T], format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + Tabled,
{
    let rendered = match format {
        OutputFormat::Table => {
            let table = Table::new(rows).to_string();
            match title {
                Some(title) => format!("{}\n{}", title, table),
                None => table,
            }
        }
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
    };
    Ok(rendered)
}

/// Print report rows; quiet mode drops the title
pub fn print_rows<T>(title: &str, rows: &[T], format: OutputFormat, quiet: bool) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    let title = (!quiet).then_some(title);
    println!("{}", render_rows(title, rows, format)?);
    Ok(())
}

/// Print a success message (respects quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", colored::Colorize::green(message));
    }
}

/// Plain, uncoloured: cron mails stderr verbatim.
pub fn print_error(message: &str) {
    eprintln!("{}", message);
}
