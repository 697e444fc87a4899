//! Command handlers
//!
//! `post` commands drive a fresh [`Wizard`] through its steps with the parsed
//! flags, the same way a user would click through the app: select the
//! category, next, fill in details, next, then preview or publish. `feed`
//! commands read the feed store directly; insights bucket days in the
//! configured time zone.

use anyhow::{bail, Context, Result};
use localhero_core::{
    display::DraftSummary,
    params::{Id, ListPosts},
    resolve_time_zone, Advance, CanonicalPost, Feed, Wizard, WizardBuilder,
};
use log::debug;

use crate::{
    cli::{
        CreatePostArgs, FeedCommands, InsightsArgs, ListPostsArgs, PostArgs, PostCommands,
        ShowPostArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    feed: Feed,
    renderer: TerminalRenderer,
    time_zone: Option<String>,
}

impl Cli {
    pub fn new(feed: Feed, renderer: TerminalRenderer, time_zone: Option<String>) -> Self {
        Self {
            feed,
            renderer,
            time_zone,
        }
    }

    pub async fn handle_post_command(&self, command: PostCommands) -> Result<()> {
        match command {
            PostCommands::Create(args) => self.create_post(&args).await,
            PostCommands::Preview(args) => self.preview_post(&args),
        }
    }

    pub async fn handle_feed_command(&self, command: FeedCommands) -> Result<()> {
        match command {
            FeedCommands::List(args) => self.list_posts(&args).await,
            FeedCommands::Show(args) => self.show_post(&args).await,
            FeedCommands::Insights(args) => self.show_insights(&args).await,
        }
    }

    async fn create_post(&self, args: &CreatePostArgs) -> Result<()> {
        let mut wizard = self.fill_wizard(&args.post)?;

        let mut published: Vec<CanonicalPost> = Vec::new();
        let notice = wizard
            .publish(&mut published)
            .context("Failed to publish post")?;
        wizard.close();

        for post in &published {
            self.feed
                .store_post(post)
                .await
                .context("Failed to store post")?;
        }

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&published).context("Failed to serialize post")?
            );
            return Ok(());
        }

        self.renderer.render(&notice.to_string());
        for post in &published {
            println!();
            self.renderer.render(&post.to_string());
        }
        Ok(())
    }

    fn preview_post(&self, args: &PostArgs) -> Result<()> {
        let wizard = self.fill_wizard(args)?;
        let card = wizard.preview_post().context("Failed to build preview")?;

        let mut output = wizard.indicator().to_string();
        output.push('\n');
        output.push_str(&card.to_string());
        output.push('\n');
        output.push_str(&DraftSummary(wizard.draft()).to_string());
        if let Some(uri) = wizard.image_preview() {
            output.push_str(&format!("- Preview: {uri}\n"));
        }

        self.renderer.render(&output);
        wizard.close();
        Ok(())
    }

    /// Runs a fresh wizard up to the preview step.
    fn fill_wizard(&self, args: &PostArgs) -> Result<Wizard> {
        let mut wizard = WizardBuilder::new()
            .with_time_zone(self.time_zone.as_deref())
            .build()
            .context("Failed to start the post wizard")?;

        wizard.select_category(args.category)?;
        self.advance(&mut wizard)?;

        let patch = args.to_patch(wizard.time_zone())?;
        wizard.apply(&patch)?;
        self.advance(&mut wizard)?;

        Ok(wizard)
    }

    fn advance(&self, wizard: &mut Wizard) -> Result<()> {
        let step = wizard.step();
        match wizard.next() {
            Advance::Moved(next) => {
                debug!("Moved from {step} to {next}");
                Ok(())
            }
            Advance::Refused(report) => {
                self.renderer.render_problem(&report.to_string());
                bail!("Cannot leave the {step} step until the missing fields are filled in")
            }
            Advance::AtEnd => Ok(()),
        }
    }

    async fn list_posts(&self, args: &ListPostsArgs) -> Result<()> {
        self.show_feed(&ListPosts::from(args), args.json).await
    }

    /// Prints the feed, newest first.
    pub async fn show_feed(&self, params: &ListPosts, json: bool) -> Result<()> {
        let posts = self
            .feed
            .list_posts(params)
            .await
            .context("Failed to list posts")?;

        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&posts.0).context("Failed to serialize posts")?
            );
        } else {
            self.renderer.render(&posts.to_string());
        }
        Ok(())
    }

    async fn show_post(&self, args: &ShowPostArgs) -> Result<()> {
        let Some(post) = self
            .feed
            .get_post(&Id::from(args))
            .await
            .context("Failed to get post")?
        else {
            bail!("Post {} not found", args.id);
        };

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&post).context("Failed to serialize post")?
            );
        } else {
            self.renderer.render(&post.to_string());
        }
        Ok(())
    }

    async fn show_insights(&self, args: &InsightsArgs) -> Result<()> {
        let time_zone = resolve_time_zone(self.time_zone.as_deref())?;
        let insights = self
            .feed
            .insights(&ListPosts::from(args), &time_zone)
            .await
            .context("Failed to compute insights")?;

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&insights).context("Failed to serialize insights")?
            );
        } else {
            self.renderer.render(&insights.to_string());
        }
        Ok(())
    }
}
