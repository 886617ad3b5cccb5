//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjour")]
#[command(about = "Mood journal with writing statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Entry fields shared by `add` and `edit`
#[derive(Args, Debug, Default)]
pub struct EntryFields {
    /// Entry title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Primary mood (see `moodjour moods`)
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Secondary mood, at most two
    #[arg(long = "also", value_name = "MOOD")]
    pub secondary: Vec<String>,

    /// Category override
    #[arg(short, long)]
    pub category: Option<String>,

    /// Tag, repeatable
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add an entry
    Add {
        #[command(flatten)]
        fields: EntryFields,

        /// Entry date (today, yesterday, monday, last friday, DD-MM-YYYY)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Entry text
        #[arg(default_value = "")]
        content: String,
    },

    /// Change an existing entry
    Edit {
        /// Entry id
        id: u32,

        #[command(flatten)]
        fields: EntryFields,

        /// Replace the entry text
        #[arg(long)]
        content: Option<String>,

        /// Remove all tags before applying --tag
        #[arg(long)]
        clear_tags: bool,

        /// Remove secondary moods before applying --also
        #[arg(long)]
        clear_also: bool,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: u32,
    },

    /// Show one entry
    Show {
        /// Entry id
        id: u32,
    },

    /// Show the entry written on a date
    On {
        /// Date (today, yesterday, monday, last friday, DD-MM-YYYY)
        date: String,
    },

    /// List entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Find entries by title, text or tag
    Search {
        /// Text to look for (case-insensitive)
        #[arg(default_value = "")]
        text: String,
    },

    /// Mood, tag, word count and streak statistics
    Stats {
        /// Number of top tags to show (default: config top_tags)
        #[arg(long)]
        tags: Option<usize>,
    },

    /// List available moods by category
    Moods,

    /// Show or set the display theme
    Theme {
        /// light or dark
        value: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
