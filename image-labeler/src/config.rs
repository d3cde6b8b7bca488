use aws_session::DEFAULT_REGION;
use rekognition_utils::LabelParams;

/// Endpoint the demonstration POST goes to unless overridden.
pub const DEFAULT_POST_URL: &str = "http://httpbin.org/post";

#[derive(Debug, Clone)]
pub struct LabelerConfig {
    /// Region used when the event does not carry one.
    pub region: String,
    pub max_labels: i32,
    pub min_confidence: f32,
    /// Target of the outbound-HTTP demonstration POST.
    pub post_url: String,
}

impl LabelerConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            region: std::env::var("IMGPROC_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            max_labels: std::env::var("IMGPROC_MAX_LABELS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            min_confidence: std::env::var("IMGPROC_MIN_CONFIDENCE")
                .unwrap_or_else(|_| "90".to_string())
                .parse()?,
            post_url: std::env::var("IMGPROC_POST_URL")
                .unwrap_or_else(|_| DEFAULT_POST_URL.to_string()),
        })
    }

    pub fn label_params(&self) -> LabelParams {
        LabelParams {
            max_labels: self.max_labels,
            min_confidence: self.min_confidence,
        }
    }
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            max_labels: 10,
            min_confidence: 90.0,
            post_url: DEFAULT_POST_URL.to_string(),
        }
    }
}
