//! Message composition from row records

use crate::domain::record::RowRecord;

/// Trailing attribution appended to every composed message
pub const ATTRIBUTION: &str = "\nSent with sheetcast\nCopyright © 2023-2025 sheetcast contributors\nThis software is open source and free to use under the MIT License.\nPermission is hereby granted, free of charge, to any person obtaining a copy of this software.";

/// Marker injected after the recipient line of the preview block.
/// Replaces the first `"  \n"` so it lands directly after the first field.
const RECIPIENT_MARKER: &str = "  \n ---(recipient line, excluded from delivery)---  \n";

/// A rendered message for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    /// Full preview block, recipient line and marker included
    pub preview: String,
    /// Delivery payload: line 1 of the block plus lines 4.. rejoined
    pub body: String,
    /// Recipient identifier taken from the first field's value
    pub recipient: Option<String>,
}

/// Render one record into a preview block and its delivery body.
///
/// The block is: optional title line, one line per field (emphasis markup
/// when `emphasis` is set), the attribution block, and a recipient marker
/// injected after the first field line. The body drops the second and third
/// lines of the block; the rule is positional, so changing any line layout
/// here changes what gets delivered.
pub fn compose(record: &RowRecord, title: Option<&str>, emphasis: bool) -> ComposedMessage {
    let mut block = match title {
        Some(t) => format!("###### {}\n", t),
        None => "\n".to_string(),
    };

    for (key, value) in record.fields() {
        if emphasis {
            block.push_str(&format!(
                "> **<font color=\"info\">{}</font>**: {}  \n",
                key, value
            ));
        } else {
            block.push_str(&format!("{}: {}  \n", key, value));
        }
    }

    block.push_str(&format!("{}  \n", ATTRIBUTION));

    let recipient = record.first_value().map(|v| v.to_string());

    // The first field line is the recipient; mark it so the preview shows it
    // will not be part of the delivered message.
    let block = block.replacen("  \n", RECIPIENT_MARKER, 1);

    let lines: Vec<&str> = block.split('\n').collect();
    let body = lines
        .iter()
        .take(1)
        .chain(lines.iter().skip(3))
        .copied()
        .collect::<Vec<&str>>()
        .join("\n");

    ComposedMessage {
        preview: block,
        body,
        recipient,
    }
}
