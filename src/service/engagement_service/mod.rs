mod dto;
mod engagement_service;
mod engagement_service_impl;
mod token_batching;

pub use dto::*;
pub use engagement_service::*;
pub use engagement_service_impl::*;
