//! Space-delimited catalog writer.
//!
//! One header line of column names, then one line per retained row. Values are
//! numeric, so nothing is quoted or escaped.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::{CellValue, ColumnSpec};
use crate::error::{AppError, ErrorKind};

pub struct CatalogWriter {
    path: PathBuf,
    writer: csv::Writer<File>,
    rows: usize,
}

impl CatalogWriter {
    /// Create (or truncate) the output file.
    pub fn create(path: &Path) -> Result<Self, AppError> {
        let file = File::create(path).map_err(|e| {
            AppError::new(
                ErrorKind::OutputOpen,
                format!("Cannot open output '{}' for writing: {e}", path.display()),
            )
        })?;

        let writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .flexible(false)
            .from_writer(file);

        Ok(Self {
            path: path.to_path_buf(),
            writer,
            rows: 0,
        })
    }

    pub fn write_header(&mut self, columns: &ColumnSpec) -> Result<(), AppError> {
        self.writer
            .write_record(columns.iter())
            .map_err(|e| self.write_error("header", e))?;
        // Flush so the header is on disk even if the query later fails.
        self.writer
            .flush()
            .map_err(|e| self.write_error("header", e.into()))
    }

    pub fn write_row(&mut self, values: &[CellValue]) -> Result<(), AppError> {
        self.writer
            .write_record(values.iter().map(|v| v.to_string()))
            .map_err(|e| self.write_error("row", e))?;
        self.rows += 1;
        Ok(())
    }

    /// Flush and close the file.
    pub fn finish(mut self) -> Result<usize, AppError> {
        self.writer
            .flush()
            .map_err(|e| self.write_error("output", e.into()))?;
        Ok(self.rows)
    }

    fn write_error(&self, what: &str, e: csv::Error) -> AppError {
        AppError::new(
            ErrorKind::OutputWrite,
            format!("Failed to write {what} to '{}': {e}", self.path.display()),
        )
    }
}
