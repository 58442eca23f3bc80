//! Bounded, newest-first history of invocation results.
//!
//! Session-scoped and never persisted. The capacity bound is structural:
//! `record` appends and trims under one lock acquisition, so concurrent
//! completions interleave in completion order without ever growing the
//! buffer past the cap.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::harness::InvocationResult;

/// Number of results retained.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Clone)]
pub struct History {
    inner: Arc<Mutex<VecDeque<InvocationResult>>>,
}

impl History {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(HISTORY_CAPACITY + 1))),
        }
    }

    /// Prepend a result, dropping the oldest entry beyond the capacity.
    pub fn record(&self, result: InvocationResult) {
        let mut buf = self.inner.lock().expect("history lock poisoned");
        buf.push_front(result);
        buf.truncate(HISTORY_CAPACITY);
    }

    /// Current results, newest first. Already ordered; no sorting needed.
    pub fn list(&self) -> Vec<InvocationResult> {
        self.inner
            .lock()
            .expect("history lock poisoned")
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("history lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty the buffer, ending the current session's record.
    pub fn clear(&self) {
        self.inner.lock().expect("history lock poisoned").clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn result(n: usize) -> InvocationResult {
        InvocationResult {
            id: uuid::Uuid::new_v4(),
            endpoint_id: format!("endpoint-{n}"),
            parameters: Default::default(),
            success: true,
            response: Some(serde_json::json!({"n": n})),
            error: None,
            duration_ms: 1,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_newest_first() {
        let history = History::new();
        history.record(result(1));
        history.record(result(2));
        history.record(result(3));
        let ids: Vec<_> = history.list().iter().map(|r| r.endpoint_id.clone()).collect();
        assert_eq!(ids, vec!["endpoint-3", "endpoint-2", "endpoint-1"]);
    }

    #[test]
    fn test_capacity_bound_evicts_oldest() {
        let history = History::new();
        for n in 1..=12 {
            history.record(result(n));
        }
        let entries = history.list();
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        assert_eq!(entries.first().unwrap().endpoint_id, "endpoint-12");
        assert_eq!(entries.last().unwrap().endpoint_id, "endpoint-3");
    }

    #[test]
    fn test_clear_resets_session() {
        let history = History::new();
        history.record(result(1));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_concurrent_records_hold_the_bound() {
        let history = History::new();
        let mut handles = Vec::new();
        for n in 0..8 {
            let h = history.clone();
            handles.push(std::thread::spawn(move || {
                for k in 0..25 {
                    h.record(result(n * 100 + k));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }
}
