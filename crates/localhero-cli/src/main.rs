//! Local Hero CLI Application
//!
//! Command-line interface for creating and browsing community posts.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::Cli;
use localhero_core::{params::ListPosts, FeedBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        time_zone,
        command,
    } = Args::parse();

    let feed = FeedBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize feed")?;

    let cli = Cli::new(feed, TerminalRenderer::new(!no_color), time_zone);

    info!("Local Hero started");

    match command {
        Some(Post { command }) => cli.handle_post_command(command).await,
        Some(Feed { command }) => cli.handle_feed_command(command).await,
        None => cli.show_feed(&ListPosts::default(), false).await,
    }
}
