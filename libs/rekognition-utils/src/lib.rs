//! Shared image-labeling client for the relay tools.
//!
//! Wraps the hosted labeling service behind the [`DetectLabels`] trait so
//! callers (and tests) can substitute the remote dependency. The wrapper's
//! only job is parameter marshaling and mapping the service error taxonomy
//! onto [`LabelFailure`]; the image analysis itself happens remotely.

use async_trait::async_trait;
use aws_sdk_rekognition::types::{Image, S3Object};
use aws_sdk_rekognition::Client;
use thiserror::Error;
use tracing::debug;

pub mod labels;

pub use labels::Label;

/// Tuning parameters forwarded verbatim to the labeling call.
#[derive(Debug, Clone, Copy)]
pub struct LabelParams {
    pub max_labels: i32,
    pub min_confidence: f32,
}

impl Default for LabelParams {
    fn default() -> Self {
        Self {
            max_labels: 10,
            min_confidence: 90.0,
        }
    }
}

/// Why a labeling call produced no result.
///
/// The taxonomy is deliberately coarse; callers that only need the
/// historical behavior collapse every variant to "no labels".
#[derive(Debug, Error)]
pub enum LabelFailure {
    #[error("bucket or object not found")]
    NotFound,

    #[error("request throttled by the labeling service")]
    Throttled,

    #[error("labeling service call failed: {0}")]
    Service(String),
}

#[async_trait]
pub trait DetectLabels: Send + Sync {
    /// Label the object at `bucket`/`key`, returning the service's label
    /// records in their original order.
    async fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
        params: LabelParams,
    ) -> Result<Vec<Label>, LabelFailure>;
}

/// Labeling client backed by the hosted service.
#[derive(Debug, Clone)]
pub struct RekognitionLabeler {
    client: Client,
}

impl RekognitionLabeler {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl DetectLabels for RekognitionLabeler {
    async fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
        params: LabelParams,
    ) -> Result<Vec<Label>, LabelFailure> {
        debug!(%bucket, %key, max_labels = params.max_labels, "calling labeling service");

        let image = Image::builder()
            .s3_object(S3Object::builder().bucket(bucket).name(key).build())
            .build();

        let response = self
            .client
            .detect_labels()
            .image(image)
            .max_labels(params.max_labels)
            .min_confidence(params.min_confidence)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                if service_err.is_invalid_s3_object_exception() {
                    LabelFailure::NotFound
                } else if service_err.is_throttling_exception()
                    || service_err.is_provisioned_throughput_exceeded_exception()
                {
                    LabelFailure::Throttled
                } else {
                    LabelFailure::Service(service_err.to_string())
                }
            })?;

        Ok(response
            .labels()
            .iter()
            .map(Label::from_sdk)
            .collect())
    }
}
