//! Dataset record as returned by the resolver asset endpoint.
//!
//! The server serializes records straight out of its document store, so a
//! few fields arrive wrapped: the identifier as `{"$oid": "..."}` and the
//! timestamps as `{"$date": <epoch seconds>}`. Deserialization flattens
//! those into plain values; nothing downstream should ever see a wrapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A catalog dataset, normalized at parse time.
///
/// The identifier is required; every other field falls back to an empty
/// default when the payload omits it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(rename = "_id", deserialize_with = "wrapped_oid")]
    pub id: String,

    #[serde(default)]
    pub uid: String,

    #[serde(default, deserialize_with = "wrapped_epoch_seconds")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "wrapped_epoch_seconds")]
    pub updated: Option<DateTime<Utc>>,

    #[serde(default)]
    pub active: Option<bool>,

    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

/// One service descriptor attached to a dataset. All fields are optional;
/// the resolver never inspects them, they just ride along with the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceEntry {
    #[serde(default, deserialize_with = "optional_wrapped_oid")]
    pub service_id: Option<String>,

    #[serde(default)]
    pub service_type: Option<String>,

    #[serde(default)]
    pub data_provider: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize)]
struct WrappedOid {
    #[serde(rename = "$oid")]
    oid: String,
}

#[derive(Deserialize)]
struct WrappedDate {
    #[serde(rename = "$date")]
    seconds: i64,
}

fn wrapped_oid<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(WrappedOid::deserialize(deserializer)?.oid)
}

fn optional_wrapped_oid<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<WrappedOid>::deserialize(deserializer)?.map(|wrapped| wrapped.oid))
}

fn wrapped_epoch_seconds<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<WrappedDate>::deserialize(deserializer)? {
        Some(wrapped) => DateTime::from_timestamp(wrapped.seconds, 0)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("timestamp out of range")),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn flattens_wrapped_object_id() {
        let dataset: Dataset = serde_json::from_value(json!({
            "_id": {"$oid": "abc123"}
        }))
        .unwrap();
        assert_eq!(dataset.id, "abc123");
        assert_eq!(dataset.uid, "");
        assert!(dataset.created.is_none());
        assert!(dataset.updated.is_none());
        assert!(dataset.active.is_none());
        assert!(dataset.services.is_empty());
    }

    #[test]
    fn converts_epoch_second_wrappers_to_dates() {
        let dataset: Dataset = serde_json::from_value(json!({
            "_id": {"$oid": "abc123"},
            "created": {"$date": 0},
            "updated": {"$date": 1000}
        }))
        .unwrap();
        assert_eq!(dataset.created, DateTime::from_timestamp(0, 0));
        assert_eq!(dataset.updated, DateTime::from_timestamp(1000, 0));
    }

    #[test]
    fn tolerates_null_timestamps() {
        let dataset: Dataset = serde_json::from_value(json!({
            "_id": {"$oid": "abc123"},
            "created": null,
            "updated": null
        }))
        .unwrap();
        assert!(dataset.created.is_none());
        assert!(dataset.updated.is_none());
    }

    #[test]
    fn reads_service_descriptors() {
        let dataset: Dataset = serde_json::from_value(json!({
            "_id": {"$oid": "abc123"},
            "uid": "urn:ioos:station:wmo:41001",
            "active": true,
            "services": [{
                "service_id": {"$oid": "def456"},
                "service_type": "SOS",
                "data_provider": "GLOS",
                "name": "glos-sos"
            }]
        }))
        .unwrap();
        assert_eq!(dataset.uid, "urn:ioos:station:wmo:41001");
        assert_eq!(dataset.active, Some(true));
        assert_eq!(dataset.services.len(), 1);
        let service = &dataset.services[0];
        assert_eq!(service.service_id.as_deref(), Some("def456"));
        assert_eq!(service.service_type.as_deref(), Some("SOS"));
        assert_eq!(service.data_provider.as_deref(), Some("GLOS"));
        assert_eq!(service.name.as_deref(), Some("glos-sos"));
    }

    #[test]
    fn rejects_payload_without_identifier() {
        let result = serde_json::from_value::<Dataset>(json!({
            "uid": "urn:ioos:station:wmo:41001"
        }));
        assert!(result.is_err());
    }
}
