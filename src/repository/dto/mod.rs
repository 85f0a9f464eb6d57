mod inactivity_threshold;
mod story;
mod user;

pub use inactivity_threshold::*;
pub use story::*;
pub use user::*;
