use super::{
    dto::{MulticastSummary, PushMessage},
    error::Error,
};
use axum::async_trait;

///
/// Upper bound the push provider places on one multicast batch.
/// Batches passed to [PushService::send_multicast] must not exceed it.
///
pub const MAX_MULTICAST_TOKENS: usize = 500;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushService: Send + Sync {
    ///
    /// Delivers one notification payload to every token of the batch.
    ///
    /// Individual token rejections are counted in the returned summary
    /// instead of failing the call.
    ///
    /// ### Errors
    /// - [Error::Authorization] when no provider credential
    ///   could be obtained, in which case nothing was sent
    ///
    async fn send_multicast(
        &self,
        tokens: &[String],
        message: &PushMessage,
    ) -> Result<MulticastSummary, Error>;
}
