//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{Cli, Commands, ProfileAction, Selection};
pub use output::{format_columns, format_profile, format_profile_list, format_progress, render_html};
pub use prompt::{confirm, page_previews};
