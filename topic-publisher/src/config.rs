use aws_session::{SessionConfig, DEFAULT_REGION};

/// Historical defaults; overridable via env for other deployments.
pub const DEFAULT_PROFILE: &str = "racelab";

#[derive(Debug, Clone)]
pub struct PublisherConfig {
    pub profile: String,
    pub region: String,
}

impl PublisherConfig {
    pub fn from_env() -> Self {
        Self {
            profile: std::env::var("SNS_PROFILE").unwrap_or_else(|_| DEFAULT_PROFILE.to_string()),
            region: std::env::var("SNS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
        }
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig::new(self.region.clone()).with_profile(self.profile.clone())
    }
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}
