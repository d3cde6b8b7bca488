//! Explicit AWS session construction.
//!
//! Credential/region selection is passed in as a value and turned into an
//! [`aws_config::SdkConfig`] at the call site; no process-wide credential
//! state is held anywhere. Service clients are constructed from the
//! returned config by the caller.

use aws_config::{BehaviorVersion, Region};
use tracing::debug;

/// Region used when neither the event nor the caller overrides it.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Where the session should look for credentials.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub region: String,
    /// Named profile from the shared credentials file. `None` means the
    /// ambient provider chain (env vars, instance role, managed runtime).
    pub profile: Option<String>,
}

impl SessionConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

/// Resolve a session config into an SDK config usable by any service client.
pub async fn load(config: &SessionConfig) -> aws_config::SdkConfig {
    debug!(region = %config.region, profile = ?config.profile, "loading AWS session");

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));
    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }
    loader.load().await
}
