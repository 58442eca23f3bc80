//! Endpoint catalog -- the typed registry of external API operations.
//!
//! The catalog is populated at process start from the built-in descriptor
//! set and may be augmented at runtime by uploaded descriptor files. Entries
//! are append-only: nothing mutates or removes a descriptor once it is in.

pub mod builtin;
pub mod categories;
pub mod upload;

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no endpoint with id '{id}'")]
    NotFound { id: String },

    #[error("malformed descriptor upload: {0}")]
    MalformedUpload(String),
}

/// Closed set of HTTP methods a descriptor may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

/// Declared type of a single endpoint parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    Integer,
    Boolean,
    Object,
    Array,
    Date,
}

/// One declared parameter of an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: ParamType,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// Display-only pricing hint for an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pricing {
    pub cost: String,
    pub unit: String,
}

/// Describes one callable external API operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub method: HttpMethod,
    pub path: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub required_params: Vec<ParamSpec>,
    #[serde(default)]
    pub optional_params: Vec<ParamSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_example: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// Outcome of a `merge` call: how many candidates made it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub accepted: usize,
    pub discarded: usize,
}

/// Process-wide registry of endpoint descriptors.
///
/// Reads take a snapshot; the only mutation is the append-only `merge`, so
/// a reader observing a slightly stale snapshot is fine.
#[derive(Clone)]
pub struct Catalog {
    entries: Arc<RwLock<Vec<EndpointDescriptor>>>,
}

impl Catalog {
    /// Catalog seeded with the built-in descriptor set.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(builtin::defaults())),
        }
    }

    /// Empty catalog, for tests and for upload validation runs.
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Full snapshot in insertion order: built-ins first, uploads after.
    pub fn get_all(&self) -> Vec<EndpointDescriptor> {
        self.entries.read().expect("catalog lock poisoned").clone()
    }

    /// First descriptor whose id matches. Duplicate ids from uploads are
    /// tolerated; insertion order wins.
    pub fn get_by_id(&self, id: &str) -> Result<EndpointDescriptor, CatalogError> {
        self.entries
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("catalog lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append every candidate that passes descriptor validation, silently
    /// discarding the rest. No de-duplication against existing ids.
    pub fn merge(&self, candidates: Vec<serde_json::Value>) -> MergeOutcome {
        let mut accepted = Vec::new();
        let mut discarded = 0usize;

        for candidate in candidates {
            match upload::accept(candidate) {
                Some(descriptor) => accepted.push(descriptor),
                None => discarded += 1,
            }
        }

        let outcome = MergeOutcome {
            accepted: accepted.len(),
            discarded,
        };

        if !accepted.is_empty() {
            let mut entries = self.entries.write().expect("catalog lock poisoned");
            entries.extend(accepted);
        }

        tracing::debug!(
            accepted = outcome.accepted,
            discarded = outcome.discarded,
            "merged descriptor candidates"
        );
        outcome
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_by_id_hit_and_miss() {
        let catalog = Catalog::new();
        let first = &builtin::defaults()[0];
        assert_eq!(catalog.get_by_id(&first.id).unwrap().id, first.id);
        assert!(matches!(
            catalog.get_by_id("no-such-endpoint"),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn test_merge_appends_after_builtins() {
        let catalog = Catalog::new();
        let before = catalog.len();
        let outcome = catalog.merge(vec![json!({
            "name": "Custom ping",
            "description": "internal health endpoint",
            "method": "GET",
            "path": "/ping"
        })]);
        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.discarded, 0);
        let all = catalog.get_all();
        assert_eq!(all.len(), before + 1);
        assert_eq!(all.last().unwrap().name, "Custom ping");
    }

    #[test]
    fn test_merge_discards_invalid_silently() {
        let catalog = Catalog::empty();
        let outcome = catalog.merge(vec![
            json!({"name": "A", "description": "d", "method": "GET", "path": "/x"}),
            json!({"foo": "bar"}),
            json!({"name": "", "description": "d", "method": "GET", "path": "/y"}),
            json!("not even an object"),
        ]);
        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.discarded, 3);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_merge_does_not_deduplicate_ids() {
        let catalog = Catalog::empty();
        let entry = json!({
            "id": "dup",
            "name": "A",
            "description": "d",
            "method": "GET",
            "path": "/x"
        });
        catalog.merge(vec![entry.clone(), entry]);
        assert_eq!(catalog.len(), 2);
        // First match wins on lookup.
        assert_eq!(catalog.get_by_id("dup").unwrap().name, "A");
    }
}
