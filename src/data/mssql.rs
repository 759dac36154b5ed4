//! SQL Server catalog source (TDS via `tiberius`).
//!
//! The async client is driven on a current-thread runtime created for the
//! duration of one `fetch`. Runtime, TCP stream and client are all locals of
//! that call, so they are torn down on every return path.

use tiberius::numeric::Numeric;
use tiberius::{AuthMethod, Client, ColumnData, Config};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};
use tracing::{debug, warn};

use crate::data::config::DbConfig;
use crate::data::query::ProcedureCall;
use crate::data::source::CatalogSource;
use crate::domain::{CellValue, ColumnSpec, Row};
use crate::error::{AppError, ErrorKind};

type TdsClient = Client<Compat<TcpStream>>;

pub struct MssqlSource {
    config: DbConfig,
}

impl MssqlSource {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    fn tds_config(&self) -> Config {
        let mut config = Config::new();
        config.host(&self.config.host);
        config.port(self.config.port);
        config.database(&self.config.database);
        config.authentication(AuthMethod::sql_server(
            &self.config.username,
            &self.config.password,
        ));
        if self.config.trust_cert {
            config.trust_cert();
        }
        config
    }

    async fn connect(&self) -> Result<TdsClient, AppError> {
        let config = self.tds_config();
        let addr = config.get_addr();
        debug!(%addr, database = %self.config.database, "connecting to catalog database");

        let tcp = TcpStream::connect(&addr)
            .await
            .map_err(|e| query_error(format!("Failed to connect to {addr}: {e}")))?;
        tcp.set_nodelay(true)
            .map_err(|e| query_error(format!("Failed to configure database socket: {e}")))?;

        Client::connect(config, tcp.compat_write())
            .await
            .map_err(|e| query_error(format!("Database login failed: {e}")))
    }

    async fn run(&self, call: &ProcedureCall) -> Result<Vec<Row>, AppError> {
        let mut client = self.connect().await?;
        let result = execute(&mut client, call).await;

        // The session is released by drop regardless; a clean close is best effort.
        if let Err(e) = client.close().await {
            warn!(error = %e, "database session did not close cleanly");
        }
        result
    }
}

impl CatalogSource for MssqlSource {
    fn fetch(&mut self, call: &ProcedureCall) -> Result<Vec<Row>, AppError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .build()
            .map_err(|e| query_error(format!("Failed to start database runtime: {e}")))?;
        runtime.block_on(self.run(call))
    }
}

async fn execute(client: &mut TdsClient, call: &ProcedureCall) -> Result<Vec<Row>, AppError> {
    let sql = call.sql();
    let rows = client
        .simple_query(sql.as_str())
        .await
        .map_err(|e| query_error(format!("Catalog query failed: {e}")))?
        .into_first_result()
        .await
        .map_err(|e| query_error(format!("Failed to read catalog result set: {e}")))?;

    debug!(rows = rows.len(), "result set materialized");
    rows.into_iter()
        .map(|row| {
            let names: Vec<String> = row.columns().iter().map(|c| c.name().to_string()).collect();
            convert_row(names.into_iter().zip(row), &call.columns)
        })
        .collect()
}

/// Keep the requested columns only. The procedure adds header columns of its
/// own (some of them text) which are never read.
fn convert_row<I>(cells: I, requested: &ColumnSpec) -> Result<Row, AppError>
where
    I: IntoIterator<Item = (String, ColumnData<'static>)>,
{
    cells
        .into_iter()
        .filter(|(name, _)| requested.contains(name))
        .map(|(name, data)| {
            let value = convert_cell(&name, data)?;
            Ok((name, value))
        })
        .collect()
}

fn convert_cell(column: &str, data: ColumnData<'static>) -> Result<Option<CellValue>, AppError> {
    let value = match data {
        ColumnData::U8(v) => v.map(|v| CellValue::Int(i64::from(v))),
        ColumnData::I16(v) => v.map(|v| CellValue::Int(i64::from(v))),
        ColumnData::I32(v) => v.map(|v| CellValue::Int(i64::from(v))),
        ColumnData::I64(v) => v.map(CellValue::Int),
        ColumnData::F32(v) => v.map(|v| CellValue::Float(f64::from(v))),
        ColumnData::F64(v) => v.map(CellValue::Float),
        ColumnData::Bit(v) => v.map(|v| CellValue::Int(i64::from(v))),
        ColumnData::Numeric(v) => v.map(numeric_cell),
        other => {
            return Err(query_error(format!(
                "Unsupported SQL type for column '{column}': {other:?}"
            )));
        }
    };
    Ok(value)
}

/// DECIMAL/NUMERIC: integral when unscaled and in range, float otherwise.
fn numeric_cell(n: Numeric) -> CellValue {
    let raw = n.value();
    if let (0, Ok(v)) = (n.scale(), i64::try_from(raw)) {
        return CellValue::Int(v);
    }
    CellValue::Float(raw as f64 / 10f64.powi(i32::from(n.scale())))
}

fn query_error(message: String) -> AppError {
    AppError::new(ErrorKind::QueryExecution, message)
}
