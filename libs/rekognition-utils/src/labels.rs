//! Label records returned by the labeling service.

use event_schema::wire;
use serde::{Deserialize, Serialize};

/// One label record: a name plus the service's confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Confidence")]
    pub confidence: f32,
}

impl Label {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }

    pub fn from_sdk(label: &aws_sdk_rekognition::types::Label) -> Self {
        Self {
            name: label.name().unwrap_or_default().to_string(),
            confidence: label.confidence().unwrap_or_default(),
        }
    }
}

/// Render labels as the single-line JSON list printed by the tools.
pub fn render_labels(labels: &[Label]) -> Result<String, serde_json::Error> {
    wire::to_spaced_string(labels)
}
