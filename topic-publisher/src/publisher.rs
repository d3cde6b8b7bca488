//! One-shot structured publish to a pub/sub topic.

use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;
use event_schema::wire;
use serde_json::json;
use tracing::debug;

use crate::error::{PublisherError, Result};

/// What gets handed to the remote publish call, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub topic_arn: String,
    pub message: String,
    pub subject: String,
}

/// The remote response, unmodified.
#[derive(Debug, Clone, Default)]
pub struct PublishReceipt {
    pub message_id: Option<String>,
    pub sequence_number: Option<String>,
}

/// Build the structured message body: the default payload plus the
/// caller's message under the email delivery channel. The default payload
/// is itself JSON-encoded inside the outer body.
pub fn build_message(msg: &str) -> Result<String> {
    let default_payload = wire::to_spaced_string(&json!({"foo": "bar"}))?;
    let body = wire::to_spaced_string(&json!({
        "default": default_payload,
        "email": msg,
    }))?;
    Ok(body)
}

pub fn build_request(topic_arn: &str, msg: &str, subject: &str) -> Result<PublishRequest> {
    Ok(PublishRequest {
        topic_arn: topic_arn.to_string(),
        message: build_message(msg)?,
        subject: subject.to_string(),
    })
}

#[async_trait]
pub trait PublishNotification: Send + Sync {
    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt>;
}

/// Publisher backed by the hosted pub/sub service.
#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: SnsClient,
}

impl SnsPublisher {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: SnsClient::new(config),
        }
    }
}

#[async_trait]
impl PublishNotification for SnsPublisher {
    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt> {
        debug!(topic = %request.topic_arn, "publishing notification");

        let response = self
            .client
            .publish()
            .target_arn(&request.topic_arn)
            .message(&request.message)
            .subject(&request.subject)
            .message_structure("json")
            .send()
            .await
            .map_err(|err| PublisherError::Publish(err.into_service_error().to_string()))?;

        Ok(PublishReceipt {
            message_id: response.message_id().map(str::to_owned),
            sequence_number: response.sequence_number().map(str::to_owned),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_body_wraps_default_payload_and_email_channel() {
        assert_eq!(
            build_message("hello").unwrap(),
            r#"{"default": "{\"foo\": \"bar\"}", "email": "hello"}"#
        );
    }

    #[test]
    fn request_passes_topic_and_subject_through() {
        let request = build_request("arn:test:topic", "hello", "greeting").unwrap();
        assert_eq!(request.topic_arn, "arn:test:topic");
        assert_eq!(request.subject, "greeting");
        assert!(request.message.contains(r#""email": "hello""#));
    }
}
