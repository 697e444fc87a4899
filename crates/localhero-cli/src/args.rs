use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FeedCommands, PostCommands};

/// Local Hero community board from the terminal
///
/// Create neighborhood posts (events, issues, jobs, good deeds and donations)
/// through the same three-step wizard as the app: pick a category, fill in
/// the details, preview, publish. Published posts land in a local feed that
/// can be listed, filtered and searched.
#[derive(Parser)]
#[command(version, about, name = "hero")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/localhero/feed.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// IANA time zone for event times (e.g. America/New_York). Defaults to
    /// the system time zone
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Local Hero CLI
///
/// - `post`: Run the post-creation wizard (create or preview a post)
/// - `feed`: Browse published posts
#[derive(Subcommand)]
pub enum Commands {
    /// Create and preview posts
    #[command(alias = "p")]
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },
    /// Browse the feed
    #[command(alias = "f")]
    Feed {
        #[command(subcommand)]
        command: FeedCommands,
    },
}
