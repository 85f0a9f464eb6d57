mod engagement_service_config;

pub use engagement_service_config::*;
