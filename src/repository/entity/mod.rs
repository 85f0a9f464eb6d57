mod story_find_entity;
mod user_find_entity;

pub use story_find_entity::*;
pub use user_find_entity::*;
