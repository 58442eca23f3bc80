//! Simulated invoker -- no network, configurable partial failure.
//!
//! Models real-world flakiness so both result paths get exercised without
//! touching the external service. Seedable for deterministic tests.

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

use super::{Invoker, ParamMap};
use crate::catalog::EndpointDescriptor;
use crate::config::SimConfig;

pub struct SimulatedInvoker {
    failure_rate: f64,
    latency_ms: u64,
    rng: Mutex<StdRng>,
}

impl SimulatedInvoker {
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            failure_rate: config.failure_rate.clamp(0.0, 1.0),
            latency_ms: config.latency_ms,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait::async_trait]
impl Invoker for SimulatedInvoker {
    async fn call(
        &self,
        endpoint: &EndpointDescriptor,
        _parameters: &ParamMap,
    ) -> Result<serde_json::Value> {
        // Draw before sleeping so the lock is never held across an await.
        let roll: f64 = self.rng.lock().expect("rng lock poisoned").gen();

        if self.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.latency_ms)).await;
        }

        if roll < self.failure_rate {
            return Err(anyhow!(
                "simulated failure: upstream returned 503 for {}",
                endpoint.id
            ));
        }

        Ok(endpoint.response_example.clone().unwrap_or_else(|| {
            serde_json::json!({
                "status": "ok",
                "endpoint": endpoint.id,
                "simulated": true
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    fn config(failure_rate: f64, seed: u64) -> SimConfig {
        SimConfig {
            failure_rate,
            latency_ms: 0,
            seed: Some(seed),
        }
    }

    #[tokio::test]
    async fn test_zero_rate_always_succeeds() {
        let invoker = SimulatedInvoker::new(&config(0.0, 7));
        let endpoint = &builtin::defaults()[0];
        for _ in 0..20 {
            assert!(invoker.call(endpoint, &ParamMap::new()).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_full_rate_always_fails() {
        let invoker = SimulatedInvoker::new(&config(1.0, 7));
        let endpoint = &builtin::defaults()[0];
        for _ in 0..20 {
            assert!(invoker.call(endpoint, &ParamMap::new()).await.is_err());
        }
    }

    #[tokio::test]
    async fn test_seed_makes_outcomes_deterministic() {
        let endpoint = &builtin::defaults()[0];
        let mut runs = Vec::new();
        for _ in 0..2 {
            let invoker = SimulatedInvoker::new(&config(0.5, 42));
            let mut outcomes = Vec::new();
            for _ in 0..32 {
                outcomes.push(invoker.call(endpoint, &ParamMap::new()).await.is_ok());
            }
            runs.push(outcomes);
        }
        assert_eq!(runs[0], runs[1]);
    }

    #[tokio::test]
    async fn test_success_payload_prefers_response_example() {
        let invoker = SimulatedInvoker::new(&config(0.0, 1));
        let with_example = builtin::defaults()
            .into_iter()
            .find(|e| e.response_example.is_some())
            .unwrap();
        let payload = invoker.call(&with_example, &ParamMap::new()).await.unwrap();
        assert_eq!(payload, with_example.response_example.unwrap());
    }
}
