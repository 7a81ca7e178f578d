//! sheetcast - Spreadsheet-to-messenger broadcast utility
//!
//! A command-line tool that reads tabular data from a spreadsheet, renders a
//! per-row text/Markdown message, and pushes it to a corporate messaging HTTP
//! API for a single row or in bulk.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SheetcastError;
