use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use textorium::SortKey;

#[derive(Parser, Debug)]
#[command(
    name = "textorium",
    bin_name = "textorium",
    version,
    disable_help_subcommand = true
)]
#[command(about = "A tagged library of text snippets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding snippets.json (overrides configuration)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Title,
    #[value(name = "createdAt", alias = "created")]
    CreatedAt,
    #[value(name = "updatedAt", alias = "updated")]
    UpdatedAt,
    Favorite,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortKey::Title,
            SortArg::CreatedAt => SortKey::CreatedAt,
            SortArg::UpdatedAt => SortKey::UpdatedAt,
            SortArg::Favorite => SortKey::Favorite,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a snippet
    #[command(alias = "a", display_order = 1)]
    Add {
        title: String,

        content: String,

        /// Tag as name or name:category (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// List snippets
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Case-insensitive search over title, content and tag names and categories
        #[arg(short, long)]
        search: Option<String>,

        /// Show only favorites
        #[arg(short, long)]
        favorites: bool,

        /// Show only snippets carrying this tag (name or name:category)
        #[arg(short, long)]
        tag: Option<String>,

        /// Sort key (defaults to configuration)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Sort ascending
        #[arg(long, conflicts_with = "desc")]
        asc: bool,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show one or more snippets in full
    #[command(alias = "v", display_order = 3)]
    View {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Change a snippet's title, content or tags
    #[command(alias = "e", display_order = 4)]
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Replace tags (repeatable; pass --tag "" to clear)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Mark snippets as favorites
    #[command(display_order = 5)]
    Fav {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Flip the flag instead of setting it
        #[arg(long)]
        toggle: bool,
    },

    /// Remove the favorite mark
    #[command(display_order = 6)]
    Unfav {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete snippets
    #[command(alias = "rm", display_order = 7)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List the distinct tags in use
    #[command(display_order = 8)]
    Tags,

    /// Export all snippets as JSON
    #[command(display_order = 20)]
    Export {
        /// Target file (defaults to export_file from configuration)
        path: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "path")]
        stdout: bool,
    },

    /// Import snippets from a JSON export, merging by id
    #[command(display_order = 21)]
    Import {
        /// File to read, or - for stdin
        path: PathBuf,

        /// Let imported records replace existing ones instead of reconciling
        #[arg(long)]
        overwrite: bool,
    },

    /// Show configuration
    #[command(display_order = 30)]
    Config {
        /// Single key to show, e.g. limits.max_title_chars
        key: Option<String>,

        /// Print a commented sample config file
        #[arg(long, conflicts_with = "key")]
        template: bool,
    },
}
