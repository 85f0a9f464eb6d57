#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("fcm authorization error: {0}")]
    Authorization(#[from] gcp_auth::Error),
}
