use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::filter::{SortKey, SortOrder, View};

mod commands;
pub mod errors;
mod handlers;
mod types;
mod validation;

pub use handlers::*;
pub use types::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Log debug output to stderr
    #[clap(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a bookmark or a note
    Add {
        #[clap(subcommand)]
        item: AddArgs,
    },
    /// Fuzzy search items
    Search {
        /// Search text, matched against tags, titles and bodies
        query: Vec<String>,

        /// Which kind of items to show
        #[clap(long, value_enum)]
        view: Option<View>,

        /// Only items carrying this exact tag
        #[clap(short = 'g', long)]
        tag: Option<String>,

        /// Sort key
        #[clap(short, long, value_enum)]
        sort: Option<SortKey>,

        /// Sort order
        #[clap(short, long, value_enum)]
        order: Option<SortOrder>,

        /// Show at most this many items
        #[clap(short, long)]
        limit: Option<usize>,

        /// Print the count
        #[clap(short = 'c', long, default_value = "false")]
        count: bool,

        #[clap(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show one item and the notes it links to
    Show {
        id: String,

        /// Highlight words matching this text
        #[clap(short, long)]
        query: Option<String>,
    },
    /// Update an item
    Edit {
        id: String,

        #[clap(short, long)]
        title: Option<String>,

        /// Bookmarks only
        #[clap(short, long)]
        url: Option<String>,

        /// Bookmarks only
        #[clap(short, long)]
        description: Option<String>,

        /// Notes only
        #[clap(short, long)]
        content: Option<String>,

        /// Replace tags, comma separated
        #[clap(short = 'g', long)]
        tags: Option<String>,

        #[clap(long, default_value = "false")]
        editor: bool,
    },
    /// Delete items
    Delete {
        #[clap(required = true)]
        ids: Vec<String>,

        /// Auto confirm
        #[clap(short, long, default_value = "false")]
        yes: bool,
    },
    /// Append tags to items
    Tag {
        #[clap(required = true)]
        ids: Vec<String>,

        /// Tags to append, comma separated
        #[clap(short = 'g', long)]
        tags: String,
    },
    /// List every tag in use
    Tags {},
    /// Append a link to another note
    Link {
        /// Note receiving the link
        note: String,
        /// Linked note
        target: String,
    },
    /// Export every item as JSON
    Export {
        /// Defaults to stdout when piped, else a dated file
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Import items from an export file, overwriting by id
    Import {
        file: PathBuf,

        #[clap(short, long, default_value = "false")]
        yes: bool,
    },
    /// Load sample bookmarks and notes
    Demo {
        #[clap(short, long, default_value = "false")]
        yes: bool,
    },
    /// Delete everything
    Wipe {
        #[clap(short, long, default_value = "false")]
        yes: bool,
    },
    /// Run the matcher and highlighter on arbitrary text
    Probe {
        query: String,
        text: String,

        /// Treat text as a tag label
        #[clap(long, default_value = "false")]
        tag: bool,
    },
}
