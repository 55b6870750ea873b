//! Compare the predefined RBAC roles published in the Customer Portal
//! documentation with the role files maintained in the rbac-config repo.
//!
//! One linear pass: fetch the documentation table, fetch the configuration
//! files, compare, log every discrepancy at warning level. Discrepancies
//! never fail the run; only fetch/auth/parse errors exit non-zero.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use rolecheck::{ConfigSource, DocsSource, compare, report};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose)?;

    log::info!("Job started.");

    let doc_roles = DocsSource::new().fetch_roles()?;
    let config_roles = ConfigSource::from_env()?.fetch_roles()?;

    report(&compare(&config_roles, &doc_roles));

    log::info!("Job done.");
    Ok(())
}
