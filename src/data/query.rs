//! The single stored-procedure call issued per run.

use crate::domain::{ColumnSpec, Window};

/// Stored procedure performing the circular-aperture galaxy search.
pub const PROCEDURE_NAME: &str = "GalaxySearchSpecColsConstraint2013";

/// Parameters for one invocation of [`PROCEDURE_NAME`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureCall {
    pub ra_search: f64,
    pub dec_search: f64,
    pub aperture_radius: f64,
    pub column_names: String,
    pub where_clause: String,
    /// Every column the caller will read back, identifier included.
    pub columns: ColumnSpec,
}

impl ProcedureCall {
    /// Centre the aperture on the window and size it to reach the corners.
    pub fn for_window(window: &Window, columns: &ColumnSpec) -> Self {
        let (ra_search, dec_search) = window.center();
        Self {
            ra_search,
            dec_search,
            aperture_radius: window.aperture_radius_arcmin(),
            column_names: columns.procedure_columns(),
            where_clause: String::new(),
            columns: columns.clone(),
        }
    }

    /// T-SQL batch text. Numeric parameters use six decimals.
    pub fn sql(&self) -> String {
        format!(
            "{PROCEDURE_NAME} @RaSearch = {:.6}, @DecSearch = {:.6}, @apertureRadius = {:.6}, \
             @ColumnNames = '{}', @WhereClause = '{}'",
            self.ra_search,
            self.dec_search,
            self.aperture_radius,
            quote_literal(&self.column_names),
            quote_literal(&self.where_clause),
        )
    }
}

fn quote_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}
