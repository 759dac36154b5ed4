//! Output catalog file.

pub mod output;

pub use output::*;
