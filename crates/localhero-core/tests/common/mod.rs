use localhero_core::{Feed, FeedBuilder};
use tempfile::TempDir;

/// Helper function to create a test feed
pub async fn create_test_feed() -> (TempDir, Feed) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let feed = FeedBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create feed");
    (temp_dir, feed)
}
