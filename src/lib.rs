//! `gcat` library crate.
//!
//! The binary (`gcat`) is a thin wrapper around this library so the window
//! maths, row filtering and file output are testable without a database.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod filter;
pub mod io;
pub mod logging;
pub mod report;
