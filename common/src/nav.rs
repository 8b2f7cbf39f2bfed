//! Navigation link state, assembled from two independent fetches.
//!
//! The navbar pulls a general config object and a providers payload in
//! parallel. `collect_links` is the rendezvous: it waits for both fetches
//! to settle, folds whatever each produced into one [`NavLinks`] map, and
//! only then hands the result to the view. A fetch that failed yields
//! `None` and contributes no fields; the wait itself is unconditional.

use std::future::Future;

use futures::join;
use serde_json::{Map, Value};

/// The only fields read out of the providers payload.
pub const PROVIDER_FIELDS: [&str; 2] = ["ra_providers", "national_partners"];

/// Accumulated link-name to link-data mapping backing the navbar template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavLinks {
    entries: Map<String, Value>,
}

impl NavLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a config payload wholesale. A non-object payload contributes
    /// nothing.
    pub fn merge_config(&mut self, config: Value) {
        if let Value::Object(fields) = config {
            self.entries.extend(fields);
        }
    }

    /// Copies the provider list fields out of the providers payload,
    /// ignoring everything else in it.
    pub fn merge_providers(&mut self, payload: &Value) {
        for field in PROVIDER_FIELDS {
            if let Some(value) = payload.get(field) {
                self.entries.insert(field.to_string(), value.clone());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.entries
    }
}

/// Waits for both fetches to settle, then merges their payloads.
///
/// The returned future completes only once both inputs have; rendering on
/// its output therefore happens exactly once, after both fetches are done.
pub async fn collect_links(
    config: impl Future<Output = Option<Value>>,
    providers: impl Future<Output = Option<Value>>,
) -> NavLinks {
    let (config, providers) = join!(config, providers);
    let mut links = NavLinks::new();
    if let Some(config) = config {
        links.merge_config(config);
    }
    if let Some(providers) = providers {
        links.merge_providers(&providers);
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use futures::future::{pending, ready};
    use serde_json::json;

    fn as_value(links: &NavLinks) -> Value {
        Value::Object(links.as_object().clone())
    }

    #[test]
    fn merges_config_and_provider_fields() {
        let links = collect_links(
            ready(Some(json!({"a": 1}))),
            ready(Some(json!({"ra_providers": ["X"], "national_partners": ["Y"]}))),
        )
        .now_or_never()
        .expect("both fetches settled");
        assert_eq!(
            as_value(&links),
            json!({"a": 1, "ra_providers": ["X"], "national_partners": ["Y"]})
        );
    }

    #[test]
    fn provider_merge_ignores_unrelated_fields() {
        let mut links = NavLinks::new();
        links.merge_providers(&json!({"ra_providers": ["X"], "extra": true}));
        assert_eq!(as_value(&links), json!({"ra_providers": ["X"]}));
    }

    #[test]
    fn failed_fetch_contributes_nothing() {
        let links = collect_links(
            ready(None),
            ready(Some(json!({"ra_providers": [], "national_partners": ["Y"]}))),
        )
        .now_or_never()
        .expect("both fetches settled");
        assert_eq!(
            as_value(&links),
            json!({"ra_providers": [], "national_partners": ["Y"]})
        );
    }

    #[test]
    fn waits_for_both_fetches() {
        let joined = collect_links(ready(Some(json!({"a": 1}))), pending());
        assert!(joined.now_or_never().is_none());
    }

    #[test]
    fn non_object_config_is_dropped() {
        let mut links = NavLinks::new();
        links.merge_config(json!(["not", "an", "object"]));
        assert!(links.is_empty());
    }
}
