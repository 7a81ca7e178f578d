//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheetcast")]
#[command(about = "Spreadsheet-to-messenger broadcast utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a config store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Manage messaging profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// List the header columns of a sheet
    Columns {
        /// Spreadsheet file (.xls or .xlsx)
        file: PathBuf,
    },

    /// Render the message for one row without sending it
    Preview {
        /// Spreadsheet file (.xls or .xlsx)
        file: PathBuf,

        #[command(flatten)]
        selection: Selection,

        /// Data row to render (1-based)
        #[arg(long, default_value_t = 1)]
        row: usize,

        /// Render the Markdown block as HTML instead of plain text
        #[arg(long)]
        html: bool,

        /// Page through rows with n/p/q on stdin
        #[arg(short, long)]
        interactive: bool,
    },

    /// Send the message for one row
    Send {
        /// Spreadsheet file (.xls or .xlsx)
        file: PathBuf,

        #[command(flatten)]
        selection: Selection,

        /// Data row to send (1-based)
        #[arg(long, default_value_t = 1)]
        row: usize,

        /// Profile to send with (default: the profile flagged default)
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Send one message per data row, in sheet order
    Broadcast {
        /// Spreadsheet file (.xls or .xlsx)
        file: PathBuf,

        #[command(flatten)]
        selection: Selection,

        /// Profile to send with (default: the profile flagged default)
        #[arg(short, long)]
        profile: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Upload a file and send it to one recipient
    SendFile {
        /// File to upload
        file: PathBuf,

        /// Recipient account id
        #[arg(long)]
        user: String,

        /// Profile to send with (default: the profile flagged default)
        #[arg(short, long)]
        profile: Option<String>,
    },
}

/// Column selection and rendering flags shared by preview/send/broadcast
#[derive(clap::Args, Debug)]
pub struct Selection {
    /// Column holding the recipient account id
    #[arg(long, value_name = "COLUMN")]
    pub to: String,

    /// Column to include in the message body (repeatable, order preserved)
    #[arg(long = "field", value_name = "COLUMN")]
    pub fields: Vec<String>,

    /// Heading line placed above the fields
    #[arg(long)]
    pub title: Option<String>,

    /// Wrap field lines in Markdown emphasis markup
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show one profile's settings
    Show { name: String },

    /// Add a new, blank profile
    Add { name: String },

    /// Remove a profile (the default profile cannot be removed)
    Remove { name: String },

    /// Rename a profile
    Rename { old: String, new: String },

    /// Set an identity field (agent-id, corp-id, corp-secret)
    Set {
        name: String,
        key: String,
        value: String,
    },

    /// Flag a profile as the default
    Default { name: String },
}
