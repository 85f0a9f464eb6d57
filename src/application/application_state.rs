use super::ApplicationEnv;
use crate::{
    repository::{StoriesRepositoryImpl, UsersRepositoryImpl},
    service::{
        engagement_service::{EngagementService, EngagementServiceConfig, EngagementServiceImpl},
        push_service::{FcmPushService, FcmPushServiceConfig},
    },
};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub engagement_service: Arc<dyn EngagementService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = Arc::new(UsersRepositoryImpl::new(db.clone()).await?);
    let stories_repository = Arc::new(StoriesRepositoryImpl::new(db).await?);

    tracing::info!("creating push delivery client");
    let token_provider = gcp_auth::provider().await?;
    let push_service = Arc::new(FcmPushService::new(
        FcmPushServiceConfig {
            project_id: env.fcm_project_id.clone(),
        },
        token_provider,
    ));

    tracing::info!("creating services");
    let engagement_service = Arc::new(EngagementServiceImpl::new(
        EngagementServiceConfig {
            new_story_freshness_window: env.new_story_freshness_window,
        },
        users_repository,
        stories_repository,
        push_service,
    ));

    Ok((
        ApplicationState { engagement_service },
        ApplicationStateToClose { db_client },
    ))
}
