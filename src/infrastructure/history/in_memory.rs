//! In-memory history stores
//!
//! `BoundedHistory` is the process-scoped ring shared across all users of
//! the process; `SessionHistory` keeps one unbounded list per session id.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::prediction::PredictionRecord;
use crate::domain::{DomainError, HistoryStore};

/// Fixed-capacity ring; the oldest entry is silently evicted past
/// capacity. The scope key is ignored: every caller shares one queue.
pub struct BoundedHistory {
    capacity: usize,
    records: RwLock<VecDeque<PredictionRecord>>,
}

impl BoundedHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: RwLock::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl HistoryStore for BoundedHistory {
    async fn append(&self, _scope: &str, record: PredictionRecord) -> Result<(), DomainError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        records.push_front(record);
        while records.len() > self.capacity {
            records.pop_back();
        }

        Ok(())
    }

    async fn clear(&self, _scope: &str) -> Result<(), DomainError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
        records.clear();
        Ok(())
    }

    async fn list(&self, _scope: &str) -> Result<Vec<PredictionRecord>, DomainError> {
        let records = self
            .records
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
        Ok(records.iter().cloned().collect())
    }
}

/// Unbounded per-session lists keyed by the browser's session id cookie.
/// Cleared only explicitly; gone on restart.
pub struct SessionHistory {
    sessions: RwLock<HashMap<String, Vec<PredictionRecord>>>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for SessionHistory {
    async fn append(&self, scope: &str, record: PredictionRecord) -> Result<(), DomainError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        sessions
            .entry(scope.to_string())
            .or_default()
            .insert(0, record);

        Ok(())
    }

    async fn clear(&self, scope: &str) -> Result<(), DomainError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
        sessions.remove(scope);
        Ok(())
    }

    async fn list(&self, scope: &str) -> Result<Vec<PredictionRecord>, DomainError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
        Ok(sessions.get(scope).cloned().unwrap_or_default())
    }
}
