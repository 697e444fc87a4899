//! Post operations for the Feed.

use jiff::{tz::TimeZone, Timestamp};

use super::Feed;
use crate::{
    display::Posts,
    error::Result,
    models::{CanonicalPost, FeedInsights},
    params::{Id, ListPosts},
};

impl Feed {
    /// Stores a published post.
    pub async fn store_post(&self, post: &CanonicalPost) -> Result<()> {
        let post = post.clone();
        self.with_database(move |db| db.insert_post(&post)).await
    }

    /// Stores every post in order, stopping at the first failure.
    pub async fn store_posts(&self, posts: &[CanonicalPost]) -> Result<()> {
        let posts = posts.to_vec();
        self.with_database(move |db| posts.iter().try_for_each(|post| db.insert_post(post)))
            .await
    }

    /// Retrieves a single post by its ID.
    pub async fn get_post(&self, params: &Id) -> Result<Option<CanonicalPost>> {
        let id = params.id.clone();
        self.with_database(move |db| db.get_post(&id)).await
    }

    /// Lists the feed, newest first.
    pub async fn list_posts(&self, params: &ListPosts) -> Result<Posts> {
        let params = params.clone();
        let posts = self.with_database(move |db| db.list_posts(&params)).await?;
        Ok(Posts(posts))
    }

    /// Summarizes the posts matching `params`, with the weekly window ending
    /// on today's date in `time_zone`.
    pub async fn insights(&self, params: &ListPosts, time_zone: &TimeZone) -> Result<FeedInsights> {
        let posts = self.list_posts(params).await?;
        let today = Timestamp::now().to_zoned(time_zone.clone()).date();
        Ok(FeedInsights::from_posts(&posts.0, today, time_zone))
    }
}
