use crate::auth::{parse_jwt_algorithms, parse_jwt_key};
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::net::SocketAddr;
use time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    pub fcm_project_id: String,

    pub five_day_sweep_schedule: String,
    pub twenty_day_sweep_schedule: String,
    pub new_story_sweep_schedule: String,
    pub new_story_freshness_window: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("STORY_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("STORY_NOTIFIER_LOG_FILENAME")?;
        let bind_address = Self::env_var("STORY_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("STORY_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("STORY_NOTIFIER_DB_NAME")?;
        let max_http_content_len =
            Self::env_var("STORY_NOTIFIER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms =
            parse_jwt_algorithms(&Self::env_var("STORY_NOTIFIER_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "STORY_NOTIFIER_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, &Self::env_var("STORY_NOTIFIER_JWT_KEY")?)?;
        let fcm_project_id = Self::env_var("STORY_NOTIFIER_FCM_PROJECT_ID")?;
        let five_day_sweep_schedule = Self::env_var("STORY_NOTIFIER_FIVE_DAY_SWEEP_SCHEDULE")?;
        let twenty_day_sweep_schedule =
            Self::env_var("STORY_NOTIFIER_TWENTY_DAY_SWEEP_SCHEDULE")?;
        let new_story_sweep_schedule = Self::env_var("STORY_NOTIFIER_NEW_STORY_SWEEP_SCHEDULE")?;
        let new_story_freshness_window: i64 =
            Self::env_var("STORY_NOTIFIER_NEW_STORY_FRESHNESS_WINDOW_MINUTES")?.parse()?;
        let new_story_freshness_window = Duration::minutes(new_story_freshness_window);

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_algorithms,
            jwt_key,
            fcm_project_id,
            five_day_sweep_schedule,
            twenty_day_sweep_schedule,
            new_story_sweep_schedule,
            new_story_freshness_window,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
