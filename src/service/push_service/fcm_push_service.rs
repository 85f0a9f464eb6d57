use super::{
    dto::{FcmPushServiceConfig, MulticastSummary, PushMessage},
    error::Error,
    PushService,
};
use anyhow::anyhow;
use axum::async_trait;
use gcp_auth::TokenProvider;
use serde::Serialize;
use std::sync::Arc;

const FIREBASE_MESSAGING_SCOPES: &[&str] =
    &["https://www.googleapis.com/auth/firebase.messaging"];

///
/// Push delivery through the FCM HTTP v1 API.
///
/// The v1 API takes a single token per request, so a multicast batch
/// is delivered as one request per token sharing one OAuth credential.
///
pub struct FcmPushService {
    http_client: reqwest::Client,
    token_provider: Arc<dyn TokenProvider>,
    endpoint: String,
}

impl FcmPushService {
    pub fn new(config: FcmPushServiceConfig, token_provider: Arc<dyn TokenProvider>) -> Self {
        let endpoint = format!(
            "https://fcm.googleapis.com/v1/projects/{}/messages:send",
            config.project_id
        );

        Self {
            http_client: reqwest::Client::new(),
            token_provider,
            endpoint,
        }
    }

    async fn send_single(
        &self,
        access_token: &str,
        device_token: &str,
        message: &PushMessage,
    ) -> anyhow::Result<()> {
        let request = FcmSendRequest {
            message: FcmMessage {
                token: device_token,
                notification: FcmNotification {
                    title: &message.title,
                    body: &message.body,
                },
            },
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(anyhow!("fcm rejected message ({status}): {body}"))
    }
}

#[async_trait]
impl PushService for FcmPushService {
    async fn send_multicast(
        &self,
        tokens: &[String],
        message: &PushMessage,
    ) -> Result<MulticastSummary, Error> {
        let access_token = self.token_provider.token(FIREBASE_MESSAGING_SCOPES).await?;

        let mut summary = MulticastSummary::default();
        for token in tokens {
            match self
                .send_single(access_token.as_str(), token, message)
                .await
            {
                Ok(()) => summary.sent += 1,
                Err(err) => {
                    tracing::warn!(%err, "push send failed");
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

#[derive(Serialize)]
struct FcmSendRequest<'a> {
    message: FcmMessage<'a>,
}

#[derive(Serialize)]
struct FcmMessage<'a> {
    token: &'a str,
    notification: FcmNotification<'a>,
}

#[derive(Serialize)]
struct FcmNotification<'a> {
    title: &'a str,
    body: &'a str,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn send_request_serializes_to_v1_wire_shape() {
        let request = FcmSendRequest {
            message: FcmMessage {
                token: "device-token",
                notification: FcmNotification {
                    title: "A new story has arrived!",
                    body: "Come read it.",
                },
            },
        };

        let serialized = serde_json::to_value(&request).unwrap();

        assert_eq!(
            serialized,
            json!({
                "message": {
                    "token": "device-token",
                    "notification": {
                        "title": "A new story has arrived!",
                        "body": "Come read it.",
                    },
                },
            })
        );
    }
}
