//! Anmeldungen CLI - mail the current registration report
//!
//! Fetches the registrations of the anniversary event, renders them into
//! a spreadsheet and mails it to the Dekanat. Meant to be run by cron
//! without arguments.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use anmeldungen_core::config::{
    DEFAULT_ATTACHMENT_NAME, DEFAULT_BASE_URL, DEFAULT_EVENT, DEFAULT_MAIL_PORT,
    DEFAULT_MAIL_SERVER,
};

/// Printed on stderr when the API returns no registrations
const EMPTY_RESULT_MESSAGE: &str = "Keine Anmeldungen bis jetzt";

#[derive(Parser)]
#[command(name = "anmeldungen")]
#[command(author, version, about = "Mail the current registration report", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Registration service base URL
    #[arg(long, env = "PEP_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Event identifier
    #[arg(long, env = "PEP_EVENT", global = true, default_value = DEFAULT_EVENT)]
    event: String,

    /// SMTP server (implicit TLS)
    #[arg(long, env = "PEP_MAIL_SERVER", global = true, default_value = DEFAULT_MAIL_SERVER)]
    mail_server: String,

    /// SMTP port
    #[arg(long, env = "PEP_MAIL_PORT", global = true, default_value_t = DEFAULT_MAIL_PORT)]
    mail_port: u16,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, render and mail the report (default)
    Send,

    /// Write the report to a file instead of mailing it
    Export {
        /// Output path
        #[arg(short, long, default_value = DEFAULT_ATTACHMENT_NAME)]
        output: PathBuf,
    },

    /// Print the report rows
    Preview,
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment or the prompt fills in.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.quiet);

    let ctx = commands::Context {
        base_url: cli.base_url,
        event: cli.event,
        mail_server: cli.mail_server,
        mail_port: cli.mail_port,
        format: cli.format,
        quiet: cli.quiet,
    };

    let result = match cli.command.unwrap_or(Commands::Send) {
        Commands::Send => commands::send::execute(&ctx).await,
        Commands::Export { output } => commands::export::execute(&ctx, &output).await,
        Commands::Preview => commands::preview::execute(&ctx).await,
    };

    if let Err(err) = &result {
        let empty = err
            .downcast_ref::<anmeldungen_core::Error>()
            .is_some_and(|e| e.is_empty_result());
        if empty {
            output::print_error(EMPTY_RESULT_MESSAGE);
            std::process::exit(1);
        }
    }

    result
}
