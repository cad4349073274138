//! Query execution against the graph store.
//!
//! Two contracts: a fail-fast write batch, and the fixed read-only edge
//! traversal used for answer context and visualization.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{CypherStatement, GraphStore, KgbError, KgbResult, Record, StoreErrorKind};

/// Upper bound on edges fetched for context and visualization.
pub const CONTEXT_LIMIT: usize = 50;

/// The statement that stopped a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementFailure {
    /// Zero-based position in the batch.
    pub index: usize,
    pub statement: String,
    pub kind: StoreErrorKind,
    pub message: String,
}

/// Tally of a write batch.
///
/// `succeeded <= attempted` always holds. On success both equal the batch
/// length; on failure `attempted` includes the failing statement and
/// `failure` records it. Statements before the failure stay committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub attempted: usize,
    pub succeeded: usize,
    pub failure: Option<StatementFailure>,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// A (source, relation, target) triple read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdgeView {
    pub source: String,
    pub relation: String,
    pub target: String,
}

impl std::fmt::Display for GraphEdgeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -[{}]-> {}", self.source, self.relation, self.target)
    }
}

/// Execute statements in order, stopping at the first failure.
///
/// Remaining statements are never attempted once one fails, since they
/// may depend on entities the failing one was meant to create.
pub async fn execute_batch<S>(store: &S, statements: &[CypherStatement]) -> ExecutionResult
where
    S: GraphStore + ?Sized,
{
    let mut result = ExecutionResult::default();

    for (index, statement) in statements.iter().enumerate() {
        result.attempted += 1;
        match store.run(statement.as_str()).await {
            Ok(()) => {
                result.succeeded += 1;
                debug!(index, "Statement executed");
            }
            Err(err) => {
                let (kind, message) = match err {
                    KgbError::Store { kind, message } => (kind, message),
                    other => (StoreErrorKind::Rejected, other.to_string()),
                };
                warn!(index, %kind, error = %message, "Statement failed, aborting batch");
                result.failure = Some(StatementFailure {
                    index,
                    statement: statement.to_string(),
                    kind,
                    message,
                });
                break;
            }
        }
    }

    info!(
        attempted = result.attempted,
        succeeded = result.succeeded,
        "Batch finished"
    );
    result
}

/// Build the fixed edge traversal query for `limit` rows.
pub fn context_query(limit: usize) -> String {
    format!(
        "MATCH (n)-[r]->(m) RETURN n.name AS source, type(r) AS edge, m.name AS target LIMIT {}",
        limit
    )
}

/// Fetch up to `limit` edges as flattened triples.
///
/// An empty store yields an empty vector. Nodes without a `name`
/// property project to an empty string.
pub async fn fetch_context<S>(store: &S, limit: usize) -> KgbResult<Vec<GraphEdgeView>>
where
    S: GraphStore + ?Sized,
{
    let rows = store.query(&context_query(limit)).await?;
    let edges: Vec<GraphEdgeView> = rows.iter().map(edge_from_record).collect();
    debug!(count = edges.len(), limit, "Fetched graph context");
    Ok(edges)
}

/// Render edges as one line each, for use as answer context.
pub fn render_context(edges: &[GraphEdgeView]) -> String {
    edges
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn edge_from_record(row: &Record) -> GraphEdgeView {
    GraphEdgeView {
        source: text_field(row, "source"),
        relation: text_field(row, "edge"),
        target: text_field(row, "target"),
    }
}

fn text_field(row: &Record, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
