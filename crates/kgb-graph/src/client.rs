//! Neo4j connection client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use kgb_core::config::GraphSettings;
use kgb_core::{GraphStore, KgbError, KgbResult, Record};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Serialize;
use tracing::{debug, info};

/// Client for Neo4j Knowledge Graph operations.
///
/// Cloning is cheap and shares the underlying connection pool. Create one
/// at startup and hand it to each request by reference.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect using the given settings.
    ///
    /// neo4rs creates its pool lazily, so a `RETURN 1` ping forces a real
    /// bolt handshake and unreachable servers fail here instead of on the
    /// first user request.
    pub async fn connect(settings: &GraphSettings) -> Result<Self> {
        let config = ConfigBuilder::default()
            .uri(&settings.uri)
            .user(&settings.user)
            .password(&settings.password)
            .db(settings.database.as_str())
            .max_connections(4)
            .fetch_size(50)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .with_context(|| format!("Neo4j at {} is not responding to queries", settings.uri))?;

        info!(uri = %settings.uri, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Get node and relationship counts for status display.
    pub async fn get_counts(&self) -> KgbResult<GraphCounts> {
        let nodes = self.count("MATCH (n) RETURN count(n) AS count").await?;
        let relationships = self.count("MATCH ()-[r]->() RETURN count(r) AS count").await?;
        Ok(GraphCounts {
            nodes,
            relationships,
        })
    }

    async fn count(&self, cypher: &str) -> KgbResult<usize> {
        let rows = self.query(cypher).await?;
        let count = rows
            .first()
            .and_then(|row| row.get("count"))
            .and_then(|v| v.as_i64())
            .unwrap_or(0);
        Ok(count.max(0) as usize)
    }
}

#[async_trait]
impl GraphStore for GraphClient {
    async fn query(&self, statement: &str) -> KgbResult<Vec<Record>> {
        debug!(statement, "Running Cypher query");
        let mut stream = self
            .graph
            .execute(Query::new(statement.to_string()))
            .await
            .map_err(store_error)?;

        let mut rows = Vec::new();
        while let Some(row) = stream.next().await.map_err(store_error)? {
            let record: Record = row
                .to()
                .map_err(|e| KgbError::rejected(format!("Cannot decode row: {:?}", e)))?;
            rows.push(record);
        }
        Ok(rows)
    }

    async fn run(&self, statement: &str) -> KgbResult<()> {
        debug!(statement, "Running Cypher statement");
        self.graph
            .run(Query::new(statement.to_string()))
            .await
            .map_err(store_error)
    }
}

/// Map a driver error onto the store failure kinds.
fn store_error(err: neo4rs::Error) -> KgbError {
    match err {
        neo4rs::Error::IOError { .. } | neo4rs::Error::ConnectionError => {
            KgbError::unavailable(err.to_string())
        }
        other => KgbError::rejected(other.to_string()),
    }
}

/// Node and relationship counts.
#[derive(Debug, Clone, Serialize)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kgb_core::StoreErrorKind;

    fn kind_of(err: KgbError) -> Option<StoreErrorKind> {
        match err {
            KgbError::Store { kind, .. } => Some(kind),
            _ => None,
        }
    }

    #[test]
    fn test_connection_errors_are_unavailable() {
        assert_eq!(
            kind_of(store_error(neo4rs::Error::ConnectionError)),
            Some(StoreErrorKind::Unavailable)
        );
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        assert_eq!(
            kind_of(store_error(neo4rs::Error::IOError { detail: io })),
            Some(StoreErrorKind::Unavailable)
        );
    }

    #[test]
    fn test_other_errors_are_rejections() {
        assert_eq!(
            kind_of(store_error(neo4rs::Error::UnexpectedMessage(
                "Invalid input 'X'".to_string()
            ))),
            Some(StoreErrorKind::Rejected)
        );
    }
}
