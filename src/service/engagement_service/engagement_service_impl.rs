use super::{token_batching::collect_tokens, EngagementService, EngagementServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{InactivityThreshold, StoriesRepository, UsersRepository},
    service::push_service::{PushMessage, PushService, MAX_MULTICAST_TOKENS},
};
use axum::async_trait;
use futures_util::{stream, StreamExt};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};

///
/// How many multicast batches are in flight at once. Batches are
/// independent, so a failed one never blocks the rest.
///
const SEND_CONCURRENCY: usize = 4;

///
/// Safety ceiling for operator-triggered broadcasts. Scheduled sweeps
/// are not capped, they process the whole eligible population.
///
const BROADCAST_TOKEN_CAP: usize = MAX_MULTICAST_TOKENS;

pub struct EngagementServiceImpl {
    config: EngagementServiceConfig,
    users_repository: Arc<dyn UsersRepository>,
    stories_repository: Arc<dyn StoriesRepository>,
    push_service: Arc<dyn PushService>,
}

impl EngagementServiceImpl {
    pub fn new(
        config: EngagementServiceConfig,
        users_repository: Arc<dyn UsersRepository>,
        stories_repository: Arc<dyn StoriesRepository>,
        push_service: Arc<dyn PushService>,
    ) -> Self {
        Self {
            config,
            users_repository,
            stories_repository,
            push_service,
        }
    }

    fn validate_broadcast(broadcast: &input::Broadcast) -> Result<(), Error> {
        if broadcast.title.trim().is_empty() {
            return Err(Error::Validation("title must not be empty"));
        }
        if broadcast.body.trim().is_empty() {
            return Err(Error::Validation("body must not be empty"));
        }

        Ok(())
    }

    fn reminder_message(threshold: InactivityThreshold) -> PushMessage {
        match threshold {
            InactivityThreshold::FiveDays => PushMessage {
                title: "We miss you! 😢".to_string(),
                body: "It has been 5 days since your last visit. Come read a new story!"
                    .to_string(),
            },
            InactivityThreshold::TwentyDays => PushMessage {
                title: "Is everything alright? 🙏".to_string(),
                body: "You have not been around for a while. There is a lot of new content waiting!"
                    .to_string(),
            },
        }
    }

    ///
    /// Splits the token set into provider sized batches and dispatches
    /// them with bounded concurrency. A failed batch is logged and the
    /// remaining batches are still attempted.
    ///
    async fn send_in_batches(&self, tokens: &[String], message: &PushMessage) {
        let batch_count = tokens.len().div_ceil(MAX_MULTICAST_TOKENS);
        tracing::info!(
            tokens = tokens.len(),
            batches = batch_count,
            "dispatching multicast batches"
        );

        stream::iter(tokens.chunks(MAX_MULTICAST_TOKENS))
            .for_each_concurrent(SEND_CONCURRENCY, |batch| async move {
                match self.push_service.send_multicast(batch, message).await {
                    Ok(summary) => tracing::info!(
                        sent = summary.sent,
                        failed = summary.failed,
                        "multicast batch dispatched"
                    ),
                    Err(err) => tracing::error!(%err, "multicast batch failed"),
                }
            })
            .await;
    }
}

#[async_trait]
impl EngagementService for EngagementServiceImpl {
    async fn broadcast(
        &self,
        broadcast: input::Broadcast,
    ) -> Result<output::BroadcastStatus, Error> {
        tracing::info!("manual broadcast requested");

        Self::validate_broadcast(&broadcast)?;

        let users = self.users_repository.find_all().await?;
        let (_, mut tokens) = collect_tokens(&users);
        if tokens.len() > BROADCAST_TOKEN_CAP {
            tracing::warn!(
                tokens = tokens.len(),
                cap = BROADCAST_TOKEN_CAP,
                "capping manual broadcast recipients"
            );
            tokens.truncate(BROADCAST_TOKEN_CAP);
        }

        if tokens.is_empty() {
            tracing::info!("no devices registered, nothing to broadcast");
            return Ok(output::BroadcastStatus { success: true });
        }

        let message = PushMessage {
            title: broadcast.title,
            body: broadcast.body,
        };
        self.send_in_batches(&tokens, &message).await;

        tracing::info!(tokens = tokens.len(), "manual broadcast finished");

        Ok(output::BroadcastStatus { success: true })
    }

    async fn run_inactivity_sweep(
        &self,
        threshold: InactivityThreshold,
        now: OffsetDateTime,
    ) -> Result<(), Error> {
        tracing::info!(?threshold, "starting inactivity sweep");

        let last_active_before = now - Duration::days(threshold.days());
        let candidates = self
            .users_repository
            .find_inactive_unnotified(threshold, last_active_before)
            .await?;
        if candidates.is_empty() {
            tracing::info!("no users crossed the threshold");
            return Ok(());
        }

        let (notified_user_ids, tokens) = collect_tokens(&candidates);
        if tokens.is_empty() {
            tracing::info!(
                candidates = candidates.len(),
                "candidates hold no push tokens"
            );
            return Ok(());
        }

        let message = Self::reminder_message(threshold);
        self.send_in_batches(&tokens, &message).await;

        // Committed once per sweep, after all batch attempts. Users who
        // contributed no token stay unflagged and remain eligible once
        // they register a device.
        self.users_repository
            .set_notified_flag(&notified_user_ids, threshold)
            .await?;

        tracing::info!(
            users = notified_user_ids.len(),
            tokens = tokens.len(),
            "inactivity sweep finished"
        );

        Ok(())
    }

    async fn run_new_story_sweep(&self, now: OffsetDateTime) -> Result<(), Error> {
        tracing::info!("starting new story sweep");

        let created_after = now - self.config.new_story_freshness_window;
        let stories = self.stories_repository.find_created_since(created_after).await?;
        let Some(newest) = stories.first() else {
            tracing::info!("no new stories");
            return Ok(());
        };
        if stories.len() > 1 {
            tracing::info!(
                count = stories.len(),
                "multiple new stories, announcing only the newest"
            );
        }

        let users = self.users_repository.find_all().await?;
        let (_, tokens) = collect_tokens(&users);
        if tokens.is_empty() {
            tracing::info!("no devices registered, nothing to announce");
            return Ok(());
        }

        let message = PushMessage {
            title: "A new story has arrived! 📖".to_string(),
            body: format!("Come read \"{}\" and other news.", newest.title),
        };
        self.send_in_batches(&tokens, &message).await;

        tracing::info!(
            story_id = %newest.id,
            tokens = tokens.len(),
            "new story sweep finished"
        );

        Ok(())
    }
}
