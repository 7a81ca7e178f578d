//! Domain layer - Message composition and row bookkeeping

pub mod compose;
pub mod cursor;
pub mod record;

pub use compose::{compose, ComposedMessage, ATTRIBUTION};
pub use cursor::PreviewCursor;
pub use record::{RecordSet, RowRecord};
