//! Preview use case: sheet rows to composed messages

use crate::domain::{compose, ComposedMessage, RecordSet};
use crate::error::{Result, SheetcastError};
use crate::infrastructure::SheetData;
use std::path::Path;

/// How a row is rendered into a message
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Optional heading line above the fields
    pub title: Option<String>,
    /// Wrap field lines in Markdown emphasis markup
    pub emphasis: bool,
}

/// Load the sheet and build the record set for one recipient column and the
/// selected body columns. Rebuilt from scratch on every call, so a changed
/// file or selection never leaks stale rows.
pub fn load_records(
    file: &Path,
    recipient_column: &str,
    body_columns: &[String],
) -> Result<RecordSet> {
    if body_columns.is_empty() {
        return Err(SheetcastError::Config(
            "No message body columns selected; pass at least one --field".to_string(),
        ));
    }

    let sheet = SheetData::open(file)?;

    let mut columns = vec![recipient_column.to_string()];
    columns.extend(body_columns.iter().cloned());

    let records = RecordSet::build(sheet.rows(), &columns)?;

    if records.data_rows() == 0 {
        return Err(SheetcastError::Sheet(format!(
            "{} has a header but no data rows",
            file.display()
        )));
    }

    Ok(records)
}

/// Compose the message at one cursor position. Positions outside the data
/// range surface as a friendly error instead of a panic.
pub fn compose_at(
    records: &RecordSet,
    position: usize,
    options: &ComposeOptions,
) -> Result<ComposedMessage> {
    if position == 0 {
        return Err(SheetcastError::Config(
            "Row 0 is the header row and cannot be previewed".to_string(),
        ));
    }

    let record = records.get(position).ok_or_else(|| {
        SheetcastError::Config(format!(
            "No preview data at row {}; the sheet has rows 1..{}",
            position,
            records.data_rows()
        ))
    })?;

    Ok(compose(record, options.title.as_deref(), options.emphasis))
}
