//! Result rows as returned by the catalog procedure.

use std::collections::HashMap;
use std::fmt;

/// A single numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Int(i64),
    Float(f64),
}

impl CellValue {
    pub fn as_f64(self) -> f64 {
        match self {
            CellValue::Int(v) => v as f64,
            CellValue::Float(v) => v,
        }
    }
}

/// Floats with magnitude outside `[1e-4, 1e16)` switch to exponent form.
const SCIENTIFIC_BELOW: f64 = 1e-4;
const SCIENTIFIC_FROM: f64 = 1e16;

impl fmt::Display for CellValue {
    /// Integers print as digits. Floats print their shortest round-trip form,
    /// keep a `.0` when integral (`-1.0`) and use a signed two-digit exponent
    /// for very small or large magnitudes (`2.3e-09`, `1e+17`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) if !v.is_finite() || v == 0.0 => write!(f, "{v:?}"),
            CellValue::Float(v) if v.abs() < SCIENTIFIC_BELOW || v.abs() >= SCIENTIFIC_FROM => {
                write_scientific(f, v)
            }
            CellValue::Float(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
        }
    }
}

fn write_scientific(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let text = format!("{v:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exp.abs())
        }
        None => f.write_str(&text),
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

/// One result row keyed by column name. `None` marks a SQL NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, Option<CellValue>>,
}

impl Row {
    /// `None` if the column is absent; `Some(None)` if it is NULL.
    pub fn get(&self, column: &str) -> Option<Option<CellValue>> {
        self.cells.get(column).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, Option<CellValue>)> for Row {
    fn from_iter<I: IntoIterator<Item = (S, Option<CellValue>)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
