mod broadcast_status;

pub use broadcast_status::*;
