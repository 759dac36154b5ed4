use crate::data::query::ProcedureCall;
use crate::domain::Row;
use crate::error::AppError;

/// Something that can run the catalog procedure and hand back every row.
///
/// Implementations own whatever session they open and must release it before
/// returning, on success and on error alike.
pub trait CatalogSource {
    fn fetch(&mut self, call: &ProcedureCall) -> Result<Vec<Row>, AppError>;
}
