use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::client::{fetch_reply, ModelClient, ReplyRequest};

/// Outcome of one request, tagged with the id the app handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyMessage {
    pub request_id: u64,
    pub text: String,
}

pub struct ReplyParams {
    pub client: Arc<dyn ModelClient>,
    pub request: ReplyRequest,
    pub request_id: u64,
}

impl std::fmt::Debug for ReplyParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyParams")
            .field("request", &self.request)
            .field("request_id", &self.request_id)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct ReplyService {
    tx: mpsc::UnboundedSender<ReplyMessage>,
}

impl ReplyService {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ReplyMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Spawn the model call. Exactly one `ReplyMessage` is sent per call,
    /// carrying either the reply text or the fallback text.
    pub fn spawn_reply(&self, params: ReplyParams) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let ReplyParams {
                client,
                request,
                request_id,
            } = params;

            debug!(request_id, "reply task started");
            let text = fetch_reply(client.as_ref(), request).await;
            if tx.send(ReplyMessage { request_id, text }).is_err() {
                debug!(request_id, "reply receiver dropped before delivery");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ApiError;
    use crate::core::constants::FALLBACK_REPLY;
    use async_trait::async_trait;
    use reqwest::StatusCode;

    struct EchoClient;

    #[async_trait]
    impl ModelClient for EchoClient {
        async fn generate(&self, request: ReplyRequest) -> Result<String, ApiError> {
            Ok(format!("echo: {} ({} prior)", request.message, request.history.len()))
        }
    }

    struct FailingClient;

    #[async_trait]
    impl ModelClient for FailingClient {
        async fn generate(&self, _request: ReplyRequest) -> Result<String, ApiError> {
            Err(ApiError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                summary: "overloaded".to_string(),
            })
        }
    }

    fn request(message: &str) -> ReplyRequest {
        ReplyRequest {
            model: "test".to_string(),
            system_instruction: String::new(),
            history: vec![crate::api::Content::text("model", "hello")],
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn delivers_reply_tagged_with_request_id() {
        let (service, mut rx) = ReplyService::new();
        service.spawn_reply(ReplyParams {
            client: Arc::new(EchoClient),
            request: request("sort this"),
            request_id: 7,
        });

        let message = rx.recv().await.expect("reply");
        assert_eq!(
            message,
            ReplyMessage {
                request_id: 7,
                text: "echo: sort this (1 prior)".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn failures_arrive_as_fallback_text() {
        let (service, mut rx) = ReplyService::new();
        service.spawn_reply(ReplyParams {
            client: Arc::new(FailingClient),
            request: request("anything"),
            request_id: 3,
        });

        let message = rx.recv().await.expect("reply");
        assert_eq!(message.request_id, 3);
        assert_eq!(message.text, FALLBACK_REPLY);
    }
}
