mod fcm_push_service_config;
mod multicast_summary;
mod push_message;

pub use fcm_push_service_config::*;
pub use multicast_summary::*;
pub use push_message::*;
