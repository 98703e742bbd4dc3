//! History store contract
//!
//! Stores are keyed by a scope string: the session-scoped implementation
//! uses the browser's session id, the process-scoped implementation
//! ignores the key and shares one queue across all callers.

use async_trait::async_trait;

use crate::domain::prediction::PredictionRecord;
use crate::domain::DomainError;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Prepend a record; the bounded implementation evicts the oldest
    /// entry past capacity.
    async fn append(&self, scope: &str, record: PredictionRecord) -> Result<(), DomainError>;

    /// Drop every record in the scope.
    async fn clear(&self, scope: &str) -> Result<(), DomainError>;

    /// Records in the scope, most recent first.
    async fn list(&self, scope: &str) -> Result<Vec<PredictionRecord>, DomainError>;
}
