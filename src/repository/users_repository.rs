use super::{
    dto::{InactivityThreshold, User},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Finds every user, regardless of activity.
    ///
    /// Documents that cannot be deserialized are skipped and logged,
    /// they never fail the whole query.
    ///
    async fn find_all(&self) -> Result<Vec<User>, Error>;

    ///
    /// Finds users whose last login is at or before `last_active_before`
    /// and whose notified flag for `threshold` is not set.
    ///
    /// Users already flagged for this threshold are never returned,
    /// which is what makes repeated sweeps idempotent.
    ///
    async fn find_inactive_unnotified(
        &self,
        threshold: InactivityThreshold,
        last_active_before: OffsetDateTime,
    ) -> Result<Vec<User>, Error>;

    ///
    /// Sets the notified flag for `threshold` on all of `user_ids`
    /// in a single batched write.
    ///
    async fn set_notified_flag(
        &self,
        user_ids: &[ObjectId],
        threshold: InactivityThreshold,
    ) -> Result<(), Error>;
}
