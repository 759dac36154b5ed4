//! Row sanitizing and window re-check.
//!
//! The procedure searches a circle around the window, so it returns objects
//! from the corners of that circle too. Each row has its NULLs replaced, its
//! RA recentred onto (-180, 180] and is then checked against the box.

use std::collections::HashMap;

use crate::domain::{CellValue, ColumnSpec, Row, Window};
use crate::error::{AppError, ErrorKind};

/// Per-column NULL substitution counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullCounters {
    counts: HashMap<String, usize>,
}

impl NullCounters {
    pub fn increment(&mut self, column: &str) {
        *self.counts.entry(column.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, column: &str) -> usize {
        self.counts.get(column).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts, in column-list order.
    pub fn in_order<'a>(&'a self, columns: &'a ColumnSpec) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        columns
            .iter()
            .filter_map(move |name| self.counts.get(name).map(|&n| (name, n)))
    }
}

/// Map RA from [0, 360) onto the signed convention used by windows.
pub fn recenter_ra(ra: f64) -> f64 {
    if ra > 180.0 { ra - 360.0 } else { ra }
}

/// Stateful sanitizer for one result set.
#[derive(Debug, Clone)]
pub struct RowFilter {
    window: Window,
    null_sub: f64,
    nulls: NullCounters,
    clipped: usize,
}

impl RowFilter {
    pub fn new(window: Window, null_sub: f64) -> Self {
        Self {
            window,
            null_sub,
            nulls: NullCounters::default(),
            clipped: 0,
        }
    }

    /// Sanitize one row.
    ///
    /// Returns the values in column order, or `None` when the row lies outside
    /// the window. A requested column missing from the row is an error.
    pub fn apply(&mut self, row: &Row, columns: &ColumnSpec) -> Result<Option<Vec<CellValue>>, AppError> {
        let mut values = Vec::with_capacity(columns.len());
        let mut ra = None;
        let mut dec = None;

        for name in columns.iter() {
            let cell = row.get(name).ok_or_else(|| {
                AppError::new(
                    ErrorKind::QueryExecution,
                    format!("Catalog result set has no column '{name}'."),
                )
            })?;
            let value = match cell {
                Some(v) => v,
                None => {
                    self.nulls.increment(name);
                    CellValue::Float(self.null_sub)
                }
            };
            match name {
                "ra" => ra = Some(value.as_f64()),
                "dec" => dec = Some(value.as_f64()),
                _ => {}
            }
            values.push(value);
        }

        let (Some(ra), Some(dec)) = (ra, dec) else {
            return Err(AppError::new(
                ErrorKind::QueryExecution,
                "Column list must include both 'ra' and 'dec' to filter rows.",
            ));
        };

        if !self.window.contains(recenter_ra(ra), dec) {
            self.clipped += 1;
            return Ok(None);
        }
        Ok(Some(values))
    }

    pub fn nulls(&self) -> &NullCounters {
        &self.nulls
    }

    pub fn clipped(&self) -> usize {
        self.clipped
    }

    pub fn into_counters(self) -> (NullCounters, usize) {
        (self.nulls, self.clipped)
    }
}
