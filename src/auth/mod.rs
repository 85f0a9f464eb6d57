pub mod dto;

mod jwt_authorization_validator;
mod util;

pub use jwt_authorization_validator::*;
pub use util::*;

pub use dto::User;
