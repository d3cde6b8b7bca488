//! Invocation entry point: normalize the event, run the labeling call,
//! report, and time the whole thing.

use std::time::Instant;

use aws_session::SessionConfig;
use event_schema::InvocationEnvelope;
use rekognition_utils::{labels, DetectLabels, RekognitionLabeler};
use serde_json::Value;
use tracing::warn;

use crate::config::LabelerConfig;
use crate::error::{LabelerError, Result};
use crate::webpost;

/// How this invocation reached us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationContext {
    /// Called directly from the command line; credentials come from the
    /// profile named in the event.
    Direct,
    /// Triggered by the managed runtime; credentials are ambient.
    Managed,
}

/// Entry point shared by the CLI and the triggered path.
///
/// Returns the formatted timing string, which is also the last line
/// printed on success. Event-shape problems and a missing profile in
/// direct mode are caller errors and abort before any remote call.
pub async fn handler(
    event: Option<&Value>,
    ctx: InvocationContext,
    config: &LabelerConfig,
) -> Result<String> {
    let started = Instant::now();

    let envelope = InvocationEnvelope::parse(event)?;
    let region = envelope
        .region
        .clone()
        .unwrap_or_else(|| config.region.clone());

    let mut session = SessionConfig::new(region);
    if ctx == InvocationContext::Direct {
        let profile = envelope.profile.clone().ok_or(LabelerError::MissingProfile)?;
        session = session.with_profile(profile);
    }

    let sdk_config = aws_session::load(&session).await;
    let labeler = RekognitionLabeler::new(&sdk_config);
    let http = reqwest::Client::new();

    dispatch(&envelope, &labeler, &http, config, started).await
}

/// Run the labeling call and the follow-up POST for an already-validated
/// envelope, printing the contract output lines.
pub async fn dispatch(
    envelope: &InvocationEnvelope,
    labeler: &dyn DetectLabels,
    http: &reqwest::Client,
    config: &LabelerConfig,
    started: Instant,
) -> Result<String> {
    let bucket = envelope.event.bucket();
    let key = envelope.event.key();

    match labeler.detect_labels(bucket, key, config.label_params()).await {
        Ok(found) if !found.is_empty() => {
            println!("Labels: {}", labels::render_labels(&found)?);
        }
        Ok(_) => println!("No labels found!"),
        Err(failure) => {
            warn!(%bucket, %key, %failure, "unable to label object");
            println!("No labels found!");
        }
    }

    let status = webpost::post_sample(http, &config.post_url).await?;
    println!("HTTP POST status: {}", status);

    let timer = format!("TIMER:CALL:{}", started.elapsed().as_millis());
    println!("{}", timer);
    Ok(timer)
}
