pub mod engagement_service;
pub mod push_service;
