//! Tolerant decoding for list-shaped responses.
//!
//! Server variants disagree on how list payloads are wrapped: some return
//! a bare array, some an envelope keyed by the resource name or `data`,
//! and some emit loosely typed records. Decoding tries those shapes in
//! order and stops at the first that fits. Each strategy reports success
//! or failure as a value; no strategy is driven by catching errors from
//! the previous one.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// Best-effort construction from one untyped JSON record.
///
/// Used by the last decode strategy. Implementations extract what they
/// can and return `None` when the record lacks a usable identifier;
/// such records are dropped from the listing.
pub(crate) trait FromRecord: Sized {
    fn from_record(record: &Map<String, Value>) -> Option<Self>;
}

/// Decode a list payload: exact shape first, then an envelope under one
/// of `envelope_keys`, then record-by-record extraction.
pub(crate) fn decode_listing<T>(body: &[u8], envelope_keys: &[&str]) -> Result<Vec<T>>
where
    T: DeserializeOwned + FromRecord,
{
    // Exact shape: a bare array of the entity.
    if let Ok(items) = serde_json::from_slice::<Vec<T>>(body) {
        return Ok(items);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    // Enveloped shape: {"workflows": [...]}, {"data": [...]}, and the like.
    if let Value::Object(map) = &value {
        for key in envelope_keys {
            if let Some(inner) = map.get(*key) {
                if let Ok(items) = serde_json::from_value::<Vec<T>>(inner.clone()) {
                    return Ok(items);
                }
            }
        }
    }

    // Last resort: untyped records, mapped defensively.
    if let Value::Array(records) = &value {
        return Ok(records
            .iter()
            .filter_map(|record| record.as_object().and_then(T::from_record))
            .collect());
    }

    Err(ClientError::Decode(
        "response shape not recognized".to_string(),
    ))
}
