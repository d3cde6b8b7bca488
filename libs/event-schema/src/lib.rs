//! Invocation-event schemas shared by the relay tools.
//!
//! The labeling tool can be invoked two ways: by a storage-trigger
//! notification carrying a `Records` list, or directly from the command
//! line with a locally synthesized event. Both shapes resolve to one
//! (bucket, key) pair; anything else is a caller error surfaced before a
//! remote call is attempted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod wire;

/// Event-source marker stamped on locally synthesized CLI events.
pub const CLI_EVENT_SOURCE: &str = "ext:invokeCLI";

/// Event-source tag carried by records emitted by the object store.
pub const S3_EVENT_SOURCE: &str = "aws:s3";

#[derive(Debug, Error)]
pub enum EventError {
    #[error("invocation event is missing or empty")]
    MissingEvent,

    #[error("storage trigger carried an empty record list")]
    EmptyRecordList,

    #[error("unsupported record event source: {0:?}")]
    UnsupportedEventSource(String),

    #[error("event shape is incomplete: {0}")]
    Malformed(String),

    #[error("event matches neither a storage trigger nor a CLI invocation")]
    UnrecognizedShape,
}

/// One record from a storage-trigger notification.
///
/// Records carry many more fields (request parameters, owner identity,
/// sequencer, ...); only the ones needed to locate the object are modeled
/// and the rest are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3EventRecord {
    #[serde(rename = "eventSource")]
    pub event_source: String,
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3ObjectRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3ObjectRef {
    pub key: String,
}

/// Event synthesized by the CLI entry point to mimic a trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliEvent {
    #[serde(rename = "eventSource")]
    pub event_source: String,
    /// Bucket name.
    pub name: String,
    /// Object key, `dir/fname`.
    pub key: String,
}

/// The two invocation shapes, validated independently.
#[derive(Debug, Clone)]
pub enum InvocationEvent {
    StorageTrigger(S3EventRecord),
    Cli(CliEvent),
}

impl InvocationEvent {
    pub fn bucket(&self) -> &str {
        match self {
            InvocationEvent::StorageTrigger(record) => &record.s3.bucket.name,
            InvocationEvent::Cli(event) => &event.name,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            InvocationEvent::StorageTrigger(record) => &record.s3.object.key,
            InvocationEvent::Cli(event) => &event.key,
        }
    }
}

/// Parsed invocation event plus the optional top-level overrides that ride
/// along with either shape.
#[derive(Debug, Clone)]
pub struct InvocationEnvelope {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub event: InvocationEvent,
}

impl InvocationEnvelope {
    /// Parse a raw invocation payload.
    ///
    /// A `Records` list always wins over the CLI shape, matching the
    /// trigger-first dispatch order of the managed runtime.
    pub fn parse(value: Option<&Value>) -> Result<Self, EventError> {
        let map = value
            .and_then(Value::as_object)
            .filter(|m| !m.is_empty())
            .ok_or(EventError::MissingEvent)?;

        let region = map.get("region").and_then(Value::as_str).map(str::to_owned);
        let profile = map.get("profile").and_then(Value::as_str).map(str::to_owned);

        let event = if let Some(records) = map.get("Records") {
            InvocationEvent::StorageTrigger(parse_storage_record(records)?)
        } else if source_matches(map.get("eventSource"), CLI_EVENT_SOURCE) {
            let cli: CliEvent = serde_json::from_value(Value::Object(map.clone()))
                .map_err(|e| EventError::Malformed(e.to_string()))?;
            InvocationEvent::Cli(cli)
        } else {
            return Err(EventError::UnrecognizedShape);
        };

        Ok(Self {
            region,
            profile,
            event,
        })
    }
}

fn source_matches(value: Option<&Value>, expected: &str) -> bool {
    value
        .and_then(Value::as_str)
        .map_or(false, |source| source.contains(expected))
}

fn parse_storage_record(records: &Value) -> Result<S3EventRecord, EventError> {
    let first = records
        .as_array()
        .ok_or_else(|| EventError::Malformed("Records is not a list".to_string()))?
        .first()
        .ok_or(EventError::EmptyRecordList)?;

    if !source_matches(first.get("eventSource"), S3_EVENT_SOURCE) {
        let source = first
            .get("eventSource")
            .and_then(Value::as_str)
            .unwrap_or_default();
        return Err(EventError::UnsupportedEventSource(source.to_owned()));
    }

    serde_json::from_value(first.clone()).map_err(|e| EventError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // A real "ObjectCreated:Put" notification, extra fields and all.
    fn storage_trigger_event() -> Value {
        serde_json::from_str(
            r#"{"Records": [{"awsRegion": "us-west-2", "eventName": "ObjectCreated:Put",
                "eventSource": "aws:s3", "eventTime": "2017-08-30T20:30:35.581Z",
                "eventVersion": "2.0",
                "requestParameters": {"sourceIPAddress": "98.171.178.234"},
                "s3": {"bucket": {"arn": "arn:aws:s3:::cjktestbkt", "name": "cjktestbkt",
                        "ownerIdentity": {"principalId": "A13UVRJM0LZTMZ"}},
                    "configurationId": "3debbff2-99b6-48d0-92df-6fba9b5ddda5",
                    "object": {"eTag": "9f2e3e584c7c8ee4866669e2d1694703",
                        "key": "imgProc/deer.jpg", "sequencer": "0059A7206B7A3C594C",
                        "size": 392689},
                    "s3SchemaVersion": "1.0"},
                "userIdentity": {"principalId": "AWS:AIDAJQRLZF5NITGU76JME"}}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn storage_trigger_resolves_bucket_and_key() {
        let envelope = InvocationEnvelope::parse(Some(&storage_trigger_event())).unwrap();
        assert_eq!(envelope.event.bucket(), "cjktestbkt");
        assert_eq!(envelope.event.key(), "imgProc/deer.jpg");
        assert!(envelope.region.is_none());
        assert!(envelope.profile.is_none());
    }

    #[test]
    fn cli_event_resolves_fields_unchanged() {
        let event = json!({
            "eventSource": "ext:invokeCLI",
            "name": "mybucket",
            "key": "imgProc/deer.jpg",
            "profile": "default"
        });
        let envelope = InvocationEnvelope::parse(Some(&event)).unwrap();
        assert_eq!(envelope.event.bucket(), "mybucket");
        assert_eq!(envelope.event.key(), "imgProc/deer.jpg");
        assert_eq!(envelope.profile.as_deref(), Some("default"));
    }

    #[test]
    fn top_level_region_is_surfaced() {
        let event = json!({
            "eventSource": "ext:invokeCLI",
            "name": "b",
            "key": "k",
            "region": "eu-central-1"
        });
        let envelope = InvocationEnvelope::parse(Some(&event)).unwrap();
        assert_eq!(envelope.region.as_deref(), Some("eu-central-1"));
    }

    #[test]
    fn missing_event_is_rejected() {
        assert!(matches!(
            InvocationEnvelope::parse(None),
            Err(EventError::MissingEvent)
        ));
        assert!(matches!(
            InvocationEnvelope::parse(Some(&json!({}))),
            Err(EventError::MissingEvent)
        ));
    }

    #[test]
    fn empty_record_list_is_rejected() {
        let event = json!({ "Records": [] });
        assert!(matches!(
            InvocationEnvelope::parse(Some(&event)),
            Err(EventError::EmptyRecordList)
        ));
    }

    #[test]
    fn non_s3_record_source_is_rejected() {
        let event = json!({
            "Records": [{"eventSource": "aws:sqs", "body": "ignored"}]
        });
        assert!(matches!(
            InvocationEnvelope::parse(Some(&event)),
            Err(EventError::UnsupportedEventSource(source)) if source == "aws:sqs"
        ));
    }

    #[test]
    fn record_missing_nested_fields_is_rejected() {
        let event = json!({
            "Records": [{"eventSource": "aws:s3", "s3": {"bucket": {"name": "b"}}}]
        });
        assert!(matches!(
            InvocationEnvelope::parse(Some(&event)),
            Err(EventError::Malformed(_))
        ));
    }

    #[test]
    fn cli_event_missing_key_is_rejected() {
        let event = json!({ "eventSource": "ext:invokeCLI", "name": "b" });
        assert!(matches!(
            InvocationEnvelope::parse(Some(&event)),
            Err(EventError::Malformed(_))
        ));
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let event = json!({ "eventSource": "ext:somethingElse", "name": "b", "key": "k" });
        assert!(matches!(
            InvocationEnvelope::parse(Some(&event)),
            Err(EventError::UnrecognizedShape)
        ));
    }
}
