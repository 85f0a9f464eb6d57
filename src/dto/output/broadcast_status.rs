use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BroadcastStatus {
    pub success: bool,
}
