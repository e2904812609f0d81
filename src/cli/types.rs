use clap::{Subcommand, ValueEnum};

#[derive(Subcommand, Debug, Clone)]
pub enum AddArgs {
    /// Add a bookmark
    Bookmark {
        /// a url
        #[clap(allow_hyphen_values = true)]
        url: Option<String>,

        /// Bookmark title
        #[clap(short, long)]
        title: Option<String>,

        /// Bookmark description
        #[clap(short, long)]
        description: Option<String>,

        /// Bookmark tags, comma separated
        #[clap(short = 'g', long)]
        tags: Option<String>,

        /// Fill the bookmark in $EDITOR
        #[clap(long, default_value = "false")]
        editor: bool,
    },
    /// Add a note
    Note {
        /// Note title
        #[clap(short, long)]
        title: Option<String>,

        /// Note content (HTML allowed)
        #[clap(short, long)]
        content: Option<String>,

        /// Note tags, comma separated
        #[clap(short = 'g', long)]
        tags: Option<String>,

        /// Fill the note in $EDITOR
        #[clap(long, default_value = "false")]
        editor: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Highlighted cards
    #[default]
    Text,
    /// Raw items
    Json,
    /// HTML fragments with <mark> highlights
    Html,
}
