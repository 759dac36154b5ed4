//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments (with `.env` fallbacks for the connection)
//! - validates the RA/DEC window before anything touches disk or network
//! - runs the fetch pipeline against the catalog database
//! - prints the verbose report

use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, DbArgs};
use crate::data::{CatalogSource, DbConfig, MssqlSource, ProcedureCall};
use crate::domain::{ColumnSpec, Window};
use crate::error::AppError;
use crate::report::{self, RunSummary};

pub mod pipeline;

pub use pipeline::FetchConfig;

/// Entry point for the `gcat` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    run_with(&cli, MssqlSource::new).map(|_| ())
}

/// Run one query using `connect` to build the catalog source.
///
/// `connect` is only called once the window is valid and the connection
/// settings are complete.
pub fn run_with<S, F>(cli: &Cli, connect: F) -> Result<RunSummary, AppError>
where
    S: CatalogSource,
    F: FnOnce(DbConfig) -> S,
{
    let config = fetch_config_from_args(cli)?;
    let db = db_config_from_args(&cli.db)?;

    let call = ProcedureCall::for_window(&config.window, &config.columns);
    if cli.verbose {
        println!("{}", report::format_query(&call.sql()));
    }

    let mut source = connect(db);
    let summary = pipeline::run_fetch(&config, &call, &mut source)?;
    debug!(
        rows_fetched = summary.rows_fetched,
        rows_written = summary.rows_written,
        "query complete"
    );

    if cli.verbose {
        println!("{}", report::format_run_summary(&summary, &config.columns));
    }
    Ok(summary)
}

pub fn fetch_config_from_args(cli: &Cli) -> Result<FetchConfig, AppError> {
    let window = Window::new(cli.ra_min, cli.ra_max, cli.dec_min, cli.dec_max)?;
    Ok(FetchConfig {
        window,
        columns: ColumnSpec::galaxy_catalog(),
        output: cli.output.clone(),
        null_sub: cli.null_sub,
    })
}

pub fn db_config_from_args(args: &DbArgs) -> Result<DbConfig, AppError> {
    DbConfig::new(
        args.db_host.clone(),
        args.db_port,
        args.db_name.clone(),
        args.db_user.clone(),
        args.db_password.clone(),
        args.db_trust_cert,
    )
}
