//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the rectangular sky window and its circumscribing aperture (`Window`)
//! - the ordered catalog column list (`ColumnSpec`)
//! - result rows and their numeric cells (`Row`, `CellValue`)

pub mod columns;
pub mod row;
pub mod window;

pub use columns::*;
pub use row::*;
pub use window::*;
