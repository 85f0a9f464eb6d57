use super::{dto::Story, error::Error};
use axum::async_trait;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoriesRepository: Send + Sync {
    ///
    /// Finds stories created at or after `created_after`,
    /// newest first.
    ///
    async fn find_created_since(&self, created_after: OffsetDateTime)
        -> Result<Vec<Story>, Error>;
}
