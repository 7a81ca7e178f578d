//! Application layer - Use cases and orchestration

pub mod dispatch;
pub mod init;
pub mod preview;
pub mod profiles;

pub use dispatch::{broadcast, send_single, Progress, SendOutcome};
pub use preview::{compose_at, load_records, ComposeOptions};
pub use profiles::ProfileService;
