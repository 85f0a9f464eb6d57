use crate::{
    dto::{input, output},
    error::Error,
    repository::InactivityThreshold,
};
use axum::async_trait;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngagementService: Send + Sync {
    ///
    /// Sends a notification written by an operator to every registered
    /// device, capped at a fixed number of recipients as a safety
    /// ceiling against accidental mass fanout.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - title is empty
    ///     - body is empty
    ///
    async fn broadcast(
        &self,
        broadcast: input::Broadcast,
    ) -> Result<output::BroadcastStatus, Error>;

    ///
    /// Reminds users who have not logged in for the threshold's number
    /// of days and were not reminded for this crossing yet, then marks
    /// them as notified so the next sweep selects nobody until their
    /// flag is cleared by a new login.
    ///
    /// `now` is passed in explicitly so time window edges can be tested
    /// without a real clock.
    ///
    async fn run_inactivity_sweep(
        &self,
        threshold: InactivityThreshold,
        now: OffsetDateTime,
    ) -> Result<(), Error>;

    ///
    /// Announces the newest story published within the freshness
    /// window to the whole user population. When several stories
    /// qualify only the newest one is announced, one notification
    /// per sweep.
    ///
    async fn run_new_story_sweep(&self, now: OffsetDateTime) -> Result<(), Error>;
}
