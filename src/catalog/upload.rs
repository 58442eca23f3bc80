//! Descriptor upload parsing and per-entry validation.
//!
//! Uploads are expected to be a JSON array of descriptor-like objects. A
//! payload that is not an array (or not JSON at all) is rejected wholesale;
//! individual elements failing validation are dropped while the rest of the
//! batch is accepted.

use serde_json::Value;

use super::{CatalogError, EndpointDescriptor};

/// Parse an uploaded payload into its candidate objects.
///
/// Only the outer shape is checked here; per-entry validation happens in
/// [`accept`] so that one bad element cannot sink the whole batch.
pub fn parse(payload: &str) -> Result<Vec<Value>, CatalogError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| CatalogError::MalformedUpload(format!("not valid JSON: {e}")))?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(CatalogError::MalformedUpload(format!(
            "expected a JSON array of descriptors, got {}",
            type_name(&other)
        ))),
    }
}

/// Validate one candidate object and turn it into a descriptor.
///
/// Acceptance gates on the four top-level fields -- name, description,
/// method, path -- being present, non-empty, and (for method) a member of
/// the closed method set. Parameter lists are taken when well-formed and
/// default to empty when absent; a structurally broken list rejects the
/// entry rather than panicking.
pub fn accept(candidate: Value) -> Option<EndpointDescriptor> {
    let obj = candidate.as_object()?;
    for field in ["name", "description", "method", "path"] {
        match obj.get(field).and_then(Value::as_str) {
            Some(s) if !s.trim().is_empty() => {}
            _ => {
                tracing::debug!(%field, "discarding descriptor candidate: missing field");
                return None;
            }
        }
    }

    let mut descriptor: EndpointDescriptor = match serde_json::from_value(candidate) {
        Ok(d) => d,
        Err(e) => {
            tracing::debug!(error = %e, "discarding descriptor candidate: bad shape");
            return None;
        }
    };

    if descriptor.id.trim().is_empty() {
        descriptor.id = derive_id(&descriptor.name);
    }
    if descriptor.category.trim().is_empty() {
        descriptor.category = "uploaded".to_string();
    }

    Some(descriptor)
}

/// Stable slug from the display name for uploads that carry no id.
fn derive_id(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        format!("uploaded-{}", uuid::Uuid::new_v4())
    } else {
        format!("uploaded-{slug}")
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse(r#"{"name": "A"}"#),
            Err(CatalogError::MalformedUpload(_))
        ));
        assert!(matches!(
            parse("not json at all"),
            Err(CatalogError::MalformedUpload(_))
        ));
    }

    #[test]
    fn test_parse_accepts_empty_array() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_accept_requires_four_fields() {
        let good = json!({"name": "A", "description": "d", "method": "POST", "path": "/x"});
        assert!(accept(good).is_some());

        for missing in ["name", "description", "method", "path"] {
            let mut v = json!({"name": "A", "description": "d", "method": "POST", "path": "/x"});
            v.as_object_mut().unwrap().remove(missing);
            assert!(accept(v).is_none(), "should reject without {missing}");
        }
    }

    #[test]
    fn test_accept_rejects_unknown_method() {
        let v = json!({"name": "A", "description": "d", "method": "PATCH", "path": "/x"});
        assert!(accept(v).is_none());
    }

    #[test]
    fn test_accept_derives_id_and_category() {
        let v = json!({"name": "Send Alert!", "description": "d", "method": "POST", "path": "/x"});
        let d = accept(v).unwrap();
        assert_eq!(d.id, "uploaded-send-alert");
        assert_eq!(d.category, "uploaded");
    }

    #[test]
    fn test_accept_keeps_well_formed_params() {
        let v = json!({
            "name": "A", "description": "d", "method": "POST", "path": "/x",
            "required_params": [
                {"name": "To", "type": "string", "description": "recipient"}
            ]
        });
        let d = accept(v).unwrap();
        assert_eq!(d.required_params.len(), 1);
        assert_eq!(d.required_params[0].name, "To");
    }

    #[test]
    fn test_accept_rejects_broken_param_shape() {
        let v = json!({
            "name": "A", "description": "d", "method": "POST", "path": "/x",
            "required_params": "not a list"
        });
        assert!(accept(v).is_none());
    }
}
