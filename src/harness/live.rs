//! Live invoker -- real HTTP calls against the external service.

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::{placeholders, resolve_path, Invoker, ParamMap};
use crate::catalog::{EndpointDescriptor, HttpMethod};
use crate::config::LiveConfig;

pub struct LiveInvoker {
    client: Client,
    base_url: String,
}

impl LiveInvoker {
    pub fn new(config: &LiveConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute descriptor paths are used as-is; relative ones (uploads,
    /// typically) are joined onto the configured base URL.
    fn url_for(&self, resolved_path: &str) -> String {
        if resolved_path.starts_with("http://") || resolved_path.starts_with("https://") {
            resolved_path.to_string()
        } else {
            format!("{}/{}", self.base_url, resolved_path.trim_start_matches('/'))
        }
    }
}

#[async_trait::async_trait]
impl Invoker for LiveInvoker {
    async fn call(
        &self,
        endpoint: &EndpointDescriptor,
        parameters: &ParamMap,
    ) -> Result<serde_json::Value> {
        let resolved = resolve_path(&endpoint.path, parameters)?;
        let url = self.url_for(&resolved);

        // Parameters consumed by the path template are not re-sent.
        let consumed = placeholders(&endpoint.path);
        let remaining: ParamMap = parameters
            .iter()
            .filter(|(name, _)| !consumed.contains(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        tracing::debug!(endpoint = %endpoint.id, method = %endpoint.method, %url, "dispatching live call");

        let request = match endpoint.method {
            HttpMethod::Get => self.client.get(&url).query(&query_pairs(&remaining)),
            HttpMethod::Delete => self.client.delete(&url).query(&query_pairs(&remaining)),
            HttpMethod::Post => self.client.post(&url).json(&remaining),
            HttpMethod::Put => self.client.put(&url).json(&remaining),
        };

        let response = request.send().await.context("request failed")?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(anyhow!("HTTP {status}: {}", snippet(&body)));
        }

        // Non-JSON bodies come back as an opaque string payload.
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }
}

fn query_pairs(parameters: &ParamMap) -> Vec<(String, String)> {
    parameters
        .iter()
        .map(|(name, value)| {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (name.clone(), rendered)
        })
        .collect()
}

fn snippet(body: &str) -> &str {
    let end = body
        .char_indices()
        .take(200)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let invoker = LiveInvoker::new(&LiveConfig {
            base_url: "https://api.example.com/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(
            invoker.url_for("/v1/things"),
            "https://api.example.com/v1/things"
        );
        assert_eq!(
            invoker.url_for("https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn test_query_pairs_render_scalars() {
        let mut p = ParamMap::new();
        p.insert("PageSize".to_string(), serde_json::json!(50));
        p.insert("To".to_string(), serde_json::json!("+15005550006"));
        let pairs = query_pairs(&p);
        assert!(pairs.contains(&("PageSize".to_string(), "50".to_string())));
        assert!(pairs.contains(&("To".to_string(), "+15005550006".to_string())));
    }
}
