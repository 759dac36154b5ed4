//! Catalog database access.
//!
//! - connection settings (`config`)
//! - the stored-procedure invocation (`query`)
//! - the `CatalogSource` seam and its SQL Server implementation (`source`, `mssql`)

pub mod config;
pub mod mssql;
pub mod query;
pub mod source;

pub use config::DbConfig;
pub use mssql::MssqlSource;
pub use query::ProcedureCall;
pub use source::CatalogSource;
