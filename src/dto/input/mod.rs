mod broadcast;

pub use broadcast::*;
