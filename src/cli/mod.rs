//! Command-line parsing for the galaxy catalog query.
//!
//! Window and output options come from flags only. Connection settings fall
//! back to `GCAT_DB_*` environment variables (a `.env` file is honored).

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "gcat",
    version,
    about = "Fetch galaxies in an RA/DEC window from the simulated LSST catalog"
)]
pub struct Cli {
    /// Print the query, row counts and NULL substitutions.
    #[arg(short, long)]
    pub verbose: bool,

    /// Name of the output catalog file to write.
    #[arg(short, long, value_name = "FILE", default_value = "gcat.dat")]
    pub output: PathBuf,

    /// Minimum DEC value to fetch (deg).
    #[arg(long, value_name = "DEC", default_value_t = -0.5, allow_negative_numbers = true)]
    pub dec_min: f64,

    /// Maximum DEC value to fetch (deg).
    #[arg(long, value_name = "DEC", default_value_t = 0.5, allow_negative_numbers = true)]
    pub dec_max: f64,

    /// Minimum RA value to fetch (deg).
    #[arg(long, value_name = "RA", default_value_t = 0.0, allow_negative_numbers = true)]
    pub ra_min: f64,

    /// Maximum RA value to fetch (deg).
    #[arg(long, value_name = "RA", default_value_t = 1.0, allow_negative_numbers = true)]
    pub ra_max: f64,

    /// Numeric value to substitute for any SQL NULLs.
    #[arg(long, value_name = "SUB", default_value_t = -1.0, allow_negative_numbers = true)]
    pub null_sub: f64,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Catalog database connection options.
#[derive(Debug, clap::Args, Clone)]
pub struct DbArgs {
    /// Database server host.
    #[arg(long, env = "GCAT_DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database server port.
    #[arg(long, env = "GCAT_DB_PORT", default_value_t = 51433)]
    pub db_port: u16,

    /// Catalog database name.
    #[arg(long, env = "GCAT_DB_NAME", default_value = "LSST")]
    pub db_name: String,

    /// SQL login name.
    #[arg(long, env = "GCAT_DB_USER", default_value = "LSST-2")]
    pub db_user: String,

    /// SQL login password.
    #[arg(long, env = "GCAT_DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Accept the server's TLS certificate without validation.
    #[arg(long, env = "GCAT_DB_TRUST_CERT")]
    pub db_trust_cert: bool,
}
