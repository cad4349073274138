//! Graph store collaborator.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::KgbResult;

/// One result row: column name to value.
pub type Record = Map<String, Value>;

/// A graph database that accepts Cypher statements.
///
/// Failures are reported as [`crate::KgbError::Store`], tagged as rejected
/// (the statement was refused) or unavailable (connectivity). No retry is
/// performed by callers in this crate.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Run a statement and return its rows.
    async fn query(&self, statement: &str) -> KgbResult<Vec<Record>>;

    /// Run a statement, discarding any rows.
    async fn run(&self, statement: &str) -> KgbResult<()> {
        self.query(statement).await.map(|_| ())
    }
}
