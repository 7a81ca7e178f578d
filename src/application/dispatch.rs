//! Message dispatch use case: single send and bulk broadcast

use crate::application::preview::{compose_at, ComposeOptions};
use crate::domain::{PreviewCursor, RecordSet};
use crate::error::{Result, SheetcastError};
use crate::infrastructure::{MessageKind, MessageTransport};
use tracing::info;

/// Result of delivering one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub position: usize,
    pub recipient: String,
}

/// Progress of a running broadcast, reported after each delivery
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
    pub recipient: String,
    pub percent: f64,
}

fn kind_for(options: &ComposeOptions) -> MessageKind {
    if options.emphasis {
        MessageKind::Markdown
    } else {
        MessageKind::Text
    }
}

fn deliver<T: MessageTransport>(
    transport: &T,
    records: &RecordSet,
    position: usize,
    options: &ComposeOptions,
) -> Result<SendOutcome> {
    let message = compose_at(records, position, options)?;

    let recipient = message.recipient.clone().ok_or_else(|| {
        SheetcastError::Config(format!("Row {} has no recipient value", position))
    })?;

    transport.send_message(&recipient, kind_for(options), &message.body)?;

    Ok(SendOutcome {
        position,
        recipient,
    })
}

/// Send the message for exactly one row.
pub fn send_single<T: MessageTransport>(
    transport: &T,
    records: &RecordSet,
    position: usize,
    options: &ComposeOptions,
) -> Result<SendOutcome> {
    let outcome = deliver(transport, records, position, options)?;
    info!("row {} sent to {}", outcome.position, outcome.recipient);
    Ok(outcome)
}

/// Send every data row in order, reporting progress after each delivery.
///
/// Deliveries are strictly sequential; the first transport failure aborts the
/// remaining rows. Returns the number of rows sent.
pub fn broadcast<T, F>(
    transport: &T,
    records: &RecordSet,
    options: &ComposeOptions,
    mut on_progress: F,
) -> Result<usize>
where
    T: MessageTransport,
    F: FnMut(&Progress),
{
    let total = records.data_rows();
    let mut cursor = PreviewCursor::new(records.len());

    loop {
        let position = cursor.position();
        let outcome = deliver(transport, records, position, options)?;

        on_progress(&Progress {
            position,
            total,
            recipient: outcome.recipient,
            percent: position as f64 / total as f64 * 100.0,
        });

        if !cursor.advance() {
            break;
        }
    }

    info!("broadcast finished, {} rows sent", total);
    Ok(total)
}
