//! Entity models returned by the workflow API.
//!
//! Server variants disagree on small details of these payloads, most
//! notably the type used for identifiers. The deserializers here absorb
//! the known variations so callers only ever see one shape.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::decode::FromRecord;

/// A workflow as reported by a listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    /// Server-assigned identifier. Some variants emit this as a JSON
    /// number, others as a numeric string; both end up here.
    #[serde(deserialize_with = "id_from_int_or_string")]
    pub id: i64,
    /// Workflow name, when the server provides one.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the workflow is currently active.
    #[serde(default)]
    pub active: Option<bool>,
}

/// A single workflow execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummary {
    /// Execution identifier, normalized to a string whether the server
    /// emits a string or an integer.
    #[serde(deserialize_with = "id_from_string_or_int")]
    pub id: String,
    /// Owning workflow, when the server reports it.
    #[serde(default)]
    pub workflow_id: Option<i64>,
    /// Status string (e.g. "success", "error"), passed through untouched.
    #[serde(default)]
    pub status: Option<String>,
    /// Start timestamp as reported by the server. Opaque to this crate.
    #[serde(default)]
    pub started_at: Option<String>,
    /// Stop timestamp as reported by the server. Opaque to this crate.
    #[serde(default)]
    pub stopped_at: Option<String>,
}

/// Identifier as it appears on the wire: either form is accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

fn id_from_int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Int(id) => Ok(id),
        RawId::Str(s) => s
            .parse()
            .map_err(|_| de::Error::custom(format!("non-numeric id: {:?}", s))),
    }
}

fn id_from_string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(id) => id.to_string(),
        RawId::Str(s) => s,
    })
}

impl FromRecord for WorkflowSummary {
    fn from_record(record: &Map<String, Value>) -> Option<Self> {
        let id = record.get("id").and_then(int_or_numeric_string)?;
        Some(Self {
            id,
            name: record
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_owned),
            active: record.get("active").and_then(Value::as_bool),
        })
    }
}

impl FromRecord for ExecutionSummary {
    fn from_record(record: &Map<String, Value>) -> Option<Self> {
        let id = record.get("id").and_then(string_or_int)?;
        Some(Self {
            id,
            workflow_id: record.get("workflowId").and_then(Value::as_i64),
            status: record
                .get("status")
                .and_then(Value::as_str)
                .map(str::to_owned),
            started_at: record
                .get("startedAt")
                .and_then(Value::as_str)
                .map(str::to_owned),
            stopped_at: record
                .get("stoppedAt")
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }
}

/// Integer identifier from a JSON number or a numeric string.
fn int_or_numeric_string(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

/// String identifier from a JSON string or an integer.
fn string_or_int(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::to_owned)
        .or_else(|| value.as_i64().map(|id| id.to_string()))
}
