//! The fetch pipeline: open output → header → query → filter → write.
//!
//! Generic over `CatalogSource` so it can run against an in-memory result set.

use std::path::PathBuf;

use tracing::debug;

use crate::data::{CatalogSource, ProcedureCall};
use crate::domain::{ColumnSpec, Window};
use crate::error::AppError;
use crate::filter::RowFilter;
use crate::io::CatalogWriter;
use crate::report::RunSummary;

/// Everything the pipeline needs besides the source itself.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub window: Window,
    pub columns: ColumnSpec,
    pub output: PathBuf,
    pub null_sub: f64,
}

/// Execute one query and write the retained rows.
///
/// The output file is opened (and its header written) before the source is
/// asked for anything, so an unwritable path never costs a round trip. If the
/// fetch fails the header-only file is left behind.
pub fn run_fetch<S>(config: &FetchConfig, call: &ProcedureCall, source: &mut S) -> Result<RunSummary, AppError>
where
    S: CatalogSource + ?Sized,
{
    let mut writer = CatalogWriter::create(&config.output)?;
    writer.write_header(&config.columns)?;

    let rows = source.fetch(call)?;
    debug!(rows = rows.len(), "fetched catalog rows");

    let mut filter = RowFilter::new(config.window, config.null_sub);
    for row in &rows {
        if let Some(values) = filter.apply(row, &config.columns)? {
            writer.write_row(&values)?;
        }
    }

    let rows_written = writer.finish()?;
    debug!(
        rows_written,
        rows_clipped = filter.clipped(),
        nulls = filter.nulls().total(),
        "catalog written"
    );
    let (nulls, rows_clipped) = filter.into_counters();

    Ok(RunSummary {
        output: config.output.clone(),
        rows_fetched: rows.len(),
        rows_written,
        rows_clipped,
        null_sub: config.null_sub,
        nulls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, Row};
    use crate::error::ErrorKind;

    /// In-memory source that records how often it was queried.
    struct MemorySource {
        rows: Vec<Row>,
        fail: bool,
        calls: usize,
    }

    impl MemorySource {
        fn with_rows(rows: Vec<Row>) -> Self {
            Self { rows, fail: false, calls: 0 }
        }

        fn failing() -> Self {
            Self { rows: Vec::new(), fail: true, calls: 0 }
        }
    }

    impl CatalogSource for MemorySource {
        fn fetch(&mut self, _call: &ProcedureCall) -> Result<Vec<Row>, AppError> {
            self.calls += 1;
            if self.fail {
                return Err(AppError::new(ErrorKind::QueryExecution, "login failed"));
            }
            Ok(self.rows.clone())
        }
    }

    fn columns() -> ColumnSpec {
        ColumnSpec::from_names(["galtileid", "ra", "dec", "redshift"])
    }

    fn row(id: i64, ra: f64, dec: f64, z: Option<f64>) -> Row {
        [
            ("galtileid", Some(CellValue::Int(id))),
            ("ra", Some(CellValue::Float(ra))),
            ("dec", Some(CellValue::Float(dec))),
            ("redshift", z.map(CellValue::Float)),
        ]
        .into_iter()
        .collect()
    }

    fn config(output: PathBuf, window: Window) -> FetchConfig {
        FetchConfig {
            window,
            columns: columns(),
            output,
            null_sub: -1.0,
        }
    }

    fn call_for(config: &FetchConfig) -> ProcedureCall {
        ProcedureCall::for_window(&config.window, &config.columns)
    }

    #[test]
    fn filters_and_writes_in_result_order() {
        let dir = tempfile::tempdir().unwrap();
        let window = Window::new(-5.0, 5.0, -0.5, 0.5).unwrap();
        let cfg = config(dir.path().join("gcat.dat"), window);
        let mut source = MemorySource::with_rows(vec![
            row(1, 0.3, 0.1, Some(0.7)),
            row(2, 182.0, 0.0, Some(0.2)),
            row(3, 359.5, -0.2, None),
            row(4, 1.0, 0.9, Some(0.1)),
        ]);

        let summary = run_fetch(&cfg, &call_for(&cfg), &mut source).unwrap();
        assert_eq!(source.calls, 1);
        assert_eq!(summary.rows_fetched, 4);
        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.rows_clipped, 2);
        assert_eq!(summary.nulls.get("redshift"), 1);

        let text = std::fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(
            text,
            "galtileid ra dec redshift\n1 0.3 0.1 0.7\n3 359.5 -0.2 -1.0\n"
        );
    }

    #[test]
    fn empty_result_leaves_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path().join("gcat.dat"), Window::new(0.0, 1.0, -0.5, 0.5).unwrap());
        let mut source = MemorySource::with_rows(Vec::new());

        let summary = run_fetch(&cfg, &call_for(&cfg), &mut source).unwrap();
        assert_eq!(summary.rows_written, 0);
        assert_eq!(summary.rows_clipped, 0);
        assert!(summary.nulls.is_empty());
        assert_eq!(
            std::fs::read_to_string(&cfg.output).unwrap(),
            "galtileid ra dec redshift\n"
        );
    }

    #[test]
    fn unwritable_output_skips_the_query() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(
            dir.path().join("missing").join("gcat.dat"),
            Window::new(0.0, 1.0, -0.5, 0.5).unwrap(),
        );
        let mut source = MemorySource::with_rows(vec![row(1, 0.3, 0.1, None)]);

        let err = run_fetch(&cfg, &call_for(&cfg), &mut source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutputOpen);
        assert_eq!(err.exit_code(), 4);
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn query_failure_propagates_after_header() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path().join("gcat.dat"), Window::new(0.0, 1.0, -0.5, 0.5).unwrap());
        let mut source = MemorySource::failing();

        let err = run_fetch(&cfg, &call_for(&cfg), &mut source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::QueryExecution);
        assert_eq!(
            std::fs::read_to_string(&cfg.output).unwrap(),
            "galtileid ra dec redshift\n"
        );
    }

    #[test]
    fn works_through_a_trait_object() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path().join("gcat.dat"), Window::new(0.0, 1.0, -0.5, 0.5).unwrap());
        let mut source: Box<dyn CatalogSource> = Box::new(MemorySource::with_rows(vec![row(9, 0.5, 0.0, Some(1.0))]));

        let summary = run_fetch(&cfg, &call_for(&cfg), source.as_mut()).unwrap();
        assert_eq!(summary.rows_written, 1);
    }
}
