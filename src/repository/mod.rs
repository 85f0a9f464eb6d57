mod dto;
mod entity;
mod error;
mod stories_repository;
mod stories_repository_impl;
mod users_repository;
mod users_repository_impl;

pub use dto::*;
pub use error::*;
pub use stories_repository::*;
pub use stories_repository_impl::*;
pub use users_repository::*;
pub use users_repository_impl::*;
