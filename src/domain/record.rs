//! Row records built from a sheet and a column selection

use crate::error::{Result, SheetcastError};

/// One sheet row mapped as ordered (column name, cell value) pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    fields: Vec<(String, String)>,
}

impl RowRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        RowRecord { fields }
    }

    /// Ordered field pairs of this record
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of the first field; identifies the message recipient
    pub fn first_value(&self) -> Option<&str> {
        self.fields.first().map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered sequence of row records for one sheet + column selection.
///
/// Index 0 mirrors the header row and is never addressed as data; data rows
/// occupy indices 1..len.
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Vec<RowRecord>,
}

impl RecordSet {
    /// Build records from raw sheet rows (row 0 = header) and the selected
    /// column names. Duplicate selections collapse to their first occurrence.
    pub fn build(rows: &[Vec<String>], columns: &[String]) -> Result<Self> {
        let header = rows
            .first()
            .ok_or_else(|| SheetcastError::Sheet("sheet has no header row".to_string()))?;

        let mut selection: Vec<(String, usize)> = Vec::new();
        for name in columns {
            if selection.iter().any(|(n, _)| n == name) {
                continue;
            }
            let index = header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| SheetcastError::UnknownColumn(name.clone()))?;
            selection.push((name.clone(), index));
        }

        let records = rows
            .iter()
            .map(|row| {
                let fields = selection
                    .iter()
                    .map(|(name, index)| {
                        (name.clone(), row.get(*index).cloned().unwrap_or_default())
                    })
                    .collect();
                RowRecord::new(fields)
            })
            .collect();

        Ok(RecordSet { records })
    }

    pub fn get(&self, index: usize) -> Option<&RowRecord> {
        self.records.get(index)
    }

    /// Total record count, header mirror included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of addressable data rows (indices 1..len)
    pub fn data_rows(&self) -> usize {
        self.records.len().saturating_sub(1)
    }
}
