//! Interactive prompts: confirmation and the preview pager

use crate::application::preview::{compose_at, ComposeOptions};
use crate::cli::output::render_html;
use crate::domain::{PreviewCursor, RecordSet};
use crate::error::{Result, SheetcastError};
use std::io::{BufRead, Write};

/// Ask a yes/no question; anything but y/yes declines. EOF declines.
pub fn confirm<R: BufRead, W: Write>(
    question: &str,
    reader: &mut R,
    writer: &mut W,
) -> std::io::Result<bool> {
    write!(writer, "{} [y/N]: ", question)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Page through row previews with n/p/q commands read from `reader`.
///
/// Mirrors the advance/retreat contract of the cursor: moving past either end
/// prints a notice and stays put.
pub fn page_previews<R: BufRead, W: Write>(
    records: &RecordSet,
    options: &ComposeOptions,
    start: usize,
    as_html: bool,
    reader: &mut R,
    writer: &mut W,
) -> Result<()> {
    let mut cursor = PreviewCursor::new(records.len());
    if !cursor.set_position(start) {
        return Err(SheetcastError::Config(format!(
            "No preview data at row {}; the sheet has rows 1..{}",
            start,
            records.data_rows()
        )));
    }

    loop {
        let message = compose_at(records, cursor.position(), options)?;
        if as_html {
            writeln!(writer, "{}", render_html(&message.preview))?;
        } else {
            writeln!(writer, "{}", message.preview)?;
        }

        write!(
            writer,
            "row {}/{} [n]ext [p]rev [q]uit: ",
            cursor.position(),
            cursor.last()
        )?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.trim() {
            "n" | "next" | "+" => {
                if !cursor.advance() {
                    writeln!(writer, "No further rows")?;
                }
            }
            "p" | "prev" | "-" => {
                if !cursor.retreat() {
                    writeln!(writer, "Already at the first row")?;
                }
            }
            "q" | "quit" | "exit" => return Ok(()),
            _ => {}
        }
    }
}
