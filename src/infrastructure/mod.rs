//! Infrastructure layer - External I/O, persistence and transport

pub mod config;
pub mod repository;
pub mod sheet;
pub mod token_cache;
pub mod transport;

pub use config::{Profile, ProfileStore, BOOTSTRAP_PROFILE};
pub use repository::{ConfigRepository, FileSystemRepository};
pub use sheet::SheetData;
pub use token_cache::{CachedToken, TokenCache, TOKEN_VALIDITY_SECS};
pub use transport::{MessageKind, MessageTransport, WeComClient, API_BASE};
