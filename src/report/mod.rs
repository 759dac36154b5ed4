//! Verbose run reporting.
//!
//! Formatting lives here so the pipeline only collects numbers.

use std::path::PathBuf;

use crate::domain::{CellValue, ColumnSpec};
use crate::filter::NullCounters;

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    pub rows_fetched: usize,
    pub rows_written: usize,
    pub rows_clipped: usize,
    pub null_sub: f64,
    pub nulls: NullCounters,
}

/// Line announcing the procedure call.
pub fn format_query(sql: &str) -> String {
    format!("using query: \"{sql}\"")
}

/// Row, NULL and clipping totals, one item per line.
pub fn format_run_summary(summary: &RunSummary, columns: &ColumnSpec) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Dumped {} rows to {}\n",
        summary.rows_written,
        summary.output.display()
    ));

    if !summary.nulls.is_empty() {
        out.push_str(&format!(
            "Replaced NULLs with {} for:\n",
            CellValue::Float(summary.null_sub)
        ));
        for (column, count) in summary.nulls.in_order(columns) {
            out.push_str(&format!("{count:>10} {column}\n"));
        }
    }

    out.push_str(&format!(
        "{} rows with (ra,dec) outside window were clipped",
        summary.rows_clipped
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(nulls: NullCounters) -> RunSummary {
        RunSummary {
            output: PathBuf::from("gcat.dat"),
            rows_fetched: 5,
            rows_written: 3,
            rows_clipped: 2,
            null_sub: -1.0,
            nulls,
        }
    }

    #[test]
    fn summary_without_nulls() {
        let text = format_run_summary(&summary(NullCounters::default()), &ColumnSpec::galaxy_catalog());
        assert_eq!(
            text,
            "Dumped 3 rows to gcat.dat\n2 rows with (ra,dec) outside window were clipped"
        );
    }

    #[test]
    fn summary_lists_null_columns_in_order() {
        let mut nulls = NullCounters::default();
        nulls.increment("y_ab");
        nulls.increment("redshift");
        nulls.increment("y_ab");
        let text = format_run_summary(&summary(nulls), &ColumnSpec::galaxy_catalog());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Replaced NULLs with -1.0 for:");
        assert_eq!(lines[2], "         1 redshift");
        assert_eq!(lines[3], "         2 y_ab");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn query_line_is_quoted() {
        assert_eq!(format_query("X @a = 1"), "using query: \"X @a = 1\"");
    }
}
