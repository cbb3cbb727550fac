//! Export command
//!
//! Write the spreadsheet to disk instead of mailing it.

use anyhow::{Context as _, Result};
use std::path::Path;

use super::{load_report, Context};
use crate::output::print_success;
use anmeldungen_core::ChainedCredentials;

pub async fn execute(ctx: &Context, output: &Path) -> Result<()> {
    let report = load_report(ctx, &ChainedCredentials::interactive()).await?;

    report
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_success(
        &format!("Exported {} registrations to {}", report.rows.len(), output.display()),
        ctx.quiet,
    );
    Ok(())
}
