//! Spreadsheet input

use crate::error::{Result, SheetcastError};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Raw contents of the first worksheet: row 0 is the header, the rest are
/// data rows
#[derive(Debug, Clone)]
pub struct SheetData {
    rows: Vec<Vec<String>>,
}

impl SheetData {
    /// Open a workbook (.xls or .xlsx) and read its first worksheet
    pub fn open(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path).map_err(|e| {
            SheetcastError::Sheet(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                SheetcastError::Sheet(format!("{} has no worksheets", path.display()))
            })?
            .map_err(|e| {
                SheetcastError::Sheet(format!("Failed to read {}: {}", path.display(), e))
            })?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        Ok(SheetData { rows })
    }

    /// All rows, header included
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row (field names)
    pub fn header(&self) -> Result<&[String]> {
        self.rows
            .first()
            .map(|row| row.as_slice())
            .ok_or_else(|| SheetcastError::Sheet("sheet has no header row".to_string()))
    }
}

/// Render a cell the way it reads in the sheet; integral floats lose the
/// trailing ".0" the parser would otherwise give them.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_float_renders_without_decimal() {
        assert_eq!(cell_to_string(&Data::Float(123.0)), "123");
        assert_eq!(cell_to_string(&Data::Float(-7.0)), "-7");
    }

    #[test]
    fn test_fractional_float_keeps_decimals() {
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
    }

    #[test]
    fn test_string_and_empty_cells() {
        assert_eq!(cell_to_string(&Data::String("Alice".to_string())), "Alice");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn test_bool_cell() {
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_open_missing_file_is_sheet_error() {
        let result = SheetData::open(Path::new("/nonexistent/input.xls"));
        match result.unwrap_err() {
            SheetcastError::Sheet(msg) => assert!(msg.contains("Failed to open")),
            other => panic!("Expected Sheet error, got {:?}", other),
        }
    }
}
