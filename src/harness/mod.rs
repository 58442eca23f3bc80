//! Invocation harness -- parameter validation, path templating, and the
//! live/simulated invoker boundary.
//!
//! The harness is the only place the catalog touches the outside world.
//! Callers always get an [`InvocationResult`] back: validation failures,
//! transport failures, and simulated failures all land in `error`, never
//! in a propagated `Err`.

pub mod live;
pub mod sim;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::catalog::EndpointDescriptor;
use crate::config::{Config, InvokerMode};
use crate::history::History;

/// Caller-supplied parameter values, keyed by declared parameter name.
pub type ParamMap = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("missing required parameter: {}", names.join(", "))]
    MissingParameter { names: Vec<String> },

    #[error("path placeholder '{{{name}}}' has no matching parameter")]
    UnresolvedPlaceholder { name: String },
}

/// Outcome of one test invocation. Exactly one of `response`/`error` is
/// populated, according to `success`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InvocationResult {
    pub id: uuid::Uuid,
    pub endpoint_id: String,
    pub parameters: ParamMap,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
    /// Taken when the result is finalized, not when the call started, so
    /// newest-first display reflects completion order.
    pub timestamp: DateTime<Utc>,
}

/// Transport seam between the harness and the outside world.
///
/// Implementations return the opaque response payload on success and an
/// error describing the failure otherwise; the harness converts either
/// into an [`InvocationResult`].
#[async_trait::async_trait]
pub trait Invoker: Send + Sync {
    async fn call(
        &self,
        endpoint: &EndpointDescriptor,
        parameters: &ParamMap,
    ) -> Result<serde_json::Value>;
}

/// Select the configured invoker implementation. Live and simulated modes
/// are never mixed within one process.
pub fn build_invoker(config: &Config) -> Result<Arc<dyn Invoker>> {
    match config.mode {
        InvokerMode::Live => Ok(Arc::new(live::LiveInvoker::new(&config.live)?)),
        InvokerMode::Simulated => Ok(Arc::new(sim::SimulatedInvoker::new(&config.simulation))),
    }
}

/// Check that every required parameter has a non-empty value.
///
/// Runs strictly before any I/O; the error names every missing field so
/// the caller can fix them all in one pass.
pub fn validate_params(endpoint: &EndpointDescriptor, parameters: &ParamMap) -> Result<(), InvokeError> {
    let missing: Vec<String> = endpoint
        .required_params
        .iter()
        .filter(|spec| !has_value(parameters, &spec.name))
        .map(|spec| spec.name.clone())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(InvokeError::MissingParameter { names: missing })
    }
}

fn has_value(parameters: &ParamMap, name: &str) -> bool {
    match parameters.get(name) {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// Substitute every `{Name}` segment in `template` from the parameter map.
/// Pure templating; the transport never sees an unresolved placeholder.
pub fn resolve_path(template: &str, parameters: &ParamMap) -> Result<String, InvokeError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| InvokeError::UnresolvedPlaceholder {
                name: after.to_string(),
            })?;
        let name = &after[..close];
        let value = parameters
            .get(name)
            .ok_or_else(|| InvokeError::UnresolvedPlaceholder {
                name: name.to_string(),
            })?;
        out.push_str(&value_as_segment(value));
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Names of the `{Name}` placeholder segments in a template, in order.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                names.push(after[..close].to_string());
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    names
}

fn value_as_segment(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Run one test invocation end to end: validate, call, record.
///
/// Never returns an error and never panics on bad input; every path
/// produces an `InvocationResult` which is appended to `history` before
/// being returned.
pub async fn run_test(
    invoker: &dyn Invoker,
    endpoint: &EndpointDescriptor,
    parameters: ParamMap,
    history: &History,
) -> InvocationResult {
    let started = Instant::now();

    let outcome = match validate_params(endpoint, &parameters) {
        Err(e) => Err(e.to_string()),
        Ok(()) => match invoker.call(endpoint, &parameters).await {
            Ok(payload) => Ok(payload),
            Err(e) => Err(e.to_string()),
        },
    };

    let duration_ms = started.elapsed().as_millis() as u64;
    let (success, response, error) = match outcome {
        Ok(payload) => (true, Some(payload), None),
        Err(message) => (false, None, Some(message)),
    };

    let result = InvocationResult {
        id: uuid::Uuid::new_v4(),
        endpoint_id: endpoint.id.clone(),
        parameters,
        success,
        response,
        error,
        duration_ms,
        timestamp: Utc::now(),
    };

    if result.success {
        tracing::info!(endpoint = %result.endpoint_id, duration_ms, "invocation succeeded");
    } else {
        tracing::warn!(
            endpoint = %result.endpoint_id,
            error = result.error.as_deref().unwrap_or(""),
            "invocation failed"
        );
    }

    history.record(result.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> ParamMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    fn send_sms() -> EndpointDescriptor {
        builtin::defaults()
            .into_iter()
            .find(|e| e.id == "messaging-send-sms")
            .unwrap()
    }

    #[test]
    fn test_validate_names_every_missing_field() {
        let endpoint = send_sms();
        let err = validate_params(&endpoint, &params(&[("To", "+18558600037")])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing required parameter"));
        assert!(msg.contains("Body"));
        assert!(msg.contains("From"));
        assert!(msg.contains("AccountSid"));
        assert!(!msg.contains("To,"));
    }

    #[test]
    fn test_validate_rejects_empty_and_null_values() {
        let endpoint = send_sms();
        let mut p = params(&[
            ("AccountSid", "AC123"),
            ("To", "+18558600037"),
            ("From", "+15005550006"),
            ("Body", "   "),
        ]);
        assert!(validate_params(&endpoint, &p).is_err());
        p.insert("Body".to_string(), serde_json::Value::Null);
        assert!(validate_params(&endpoint, &p).is_err());
        p.insert("Body".to_string(), json!("hello"));
        assert!(validate_params(&endpoint, &p).is_ok());
    }

    #[test]
    fn test_resolve_path_substitutes_placeholders() {
        let p = params(&[("AccountSid", "AC123"), ("MessageSid", "SM9")]);
        let resolved = resolve_path(
            "https://api.example.com/Accounts/{AccountSid}/Messages/{MessageSid}.json",
            &p,
        )
        .unwrap();
        assert_eq!(
            resolved,
            "https://api.example.com/Accounts/AC123/Messages/SM9.json"
        );
    }

    #[test]
    fn test_resolve_path_reports_first_unresolved() {
        let p = params(&[("AccountSid", "AC123")]);
        let err = resolve_path("/Accounts/{AccountSid}/Calls/{CallSid}", &p).unwrap_err();
        assert!(matches!(
            err,
            InvokeError::UnresolvedPlaceholder { ref name } if name == "CallSid"
        ));
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            placeholders("/a/{One}/b/{Two}.json"),
            vec!["One".to_string(), "Two".to_string()]
        );
        assert!(placeholders("/plain/path").is_empty());
    }
}
