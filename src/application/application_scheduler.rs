use super::ApplicationEnv;
use crate::{repository::InactivityThreshold, service::engagement_service::EngagementService};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio_cron_scheduler::{Job, JobScheduler};

///
/// Registers the recurring sweeps and starts the scheduler.
///
/// A failed sweep run is logged and the schedule keeps ticking,
/// the next run starts from a clean slate.
///
pub async fn start_scheduler(
    env: &ApplicationEnv,
    engagement_service: Arc<dyn EngagementService>,
) -> anyhow::Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let service = engagement_service.clone();
    let five_day_sweep = Job::new_async(env.five_day_sweep_schedule.as_str(), move |_, _| {
        let service = service.clone();
        Box::pin(async move {
            let now = OffsetDateTime::now_utc();
            if let Err(err) = service
                .run_inactivity_sweep(InactivityThreshold::FiveDays, now)
                .await
            {
                tracing::error!(%err, "five day sweep failed");
            }
        })
    })?;
    scheduler.add(five_day_sweep).await?;

    let service = engagement_service.clone();
    let twenty_day_sweep = Job::new_async(env.twenty_day_sweep_schedule.as_str(), move |_, _| {
        let service = service.clone();
        Box::pin(async move {
            let now = OffsetDateTime::now_utc();
            if let Err(err) = service
                .run_inactivity_sweep(InactivityThreshold::TwentyDays, now)
                .await
            {
                tracing::error!(%err, "twenty day sweep failed");
            }
        })
    })?;
    scheduler.add(twenty_day_sweep).await?;

    let service = engagement_service;
    let new_story_sweep = Job::new_async(env.new_story_sweep_schedule.as_str(), move |_, _| {
        let service = service.clone();
        Box::pin(async move {
            let now = OffsetDateTime::now_utc();
            if let Err(err) = service.run_new_story_sweep(now).await {
                tracing::error!(%err, "new story sweep failed");
            }
        })
    })?;
    scheduler.add(new_story_sweep).await?;

    tracing::info!("starting scheduler");
    scheduler.start().await?;

    Ok(scheduler)
}
