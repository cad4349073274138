//! In-memory collaborators for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::{GraphStore, KgbError, KgbResult, ModelInvoker, Record, StoreErrorKind};

/// Model that replays canned replies in order and records every call.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<&str, &str>>) -> Self {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelInvoker for ScriptedModel {
    async fn complete(&self, system: &str, human: &str) -> KgbResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), human.to_string()));
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(msg)) => Err(KgbError::model(msg)),
            None => Err(KgbError::model("no scripted reply left")),
        }
    }
}

/// Store holding a fixed edge list that can be told to fail on the Nth call.
#[derive(Default)]
pub struct MemoryStore {
    edges: Vec<(Option<String>, String, Option<String>)>,
    fail_on: Option<(usize, StoreErrorKind)>,
    executed: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn with_edges(edges: &[(&str, &str, &str)]) -> Self {
        Self {
            edges: edges
                .iter()
                .map(|(s, e, t)| (Some(s.to_string()), e.to_string(), Some(t.to_string())))
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_unnamed_edge(mut self, edge: &str) -> Self {
        self.edges.push((None, edge.to_string(), None));
        self
    }

    /// Fail the call with the given zero-based index.
    pub fn failing_on(mut self, index: usize, kind: StoreErrorKind) -> Self {
        self.fail_on = Some((index, kind));
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn query(&self, statement: &str) -> KgbResult<Vec<Record>> {
        let index = {
            let mut executed = self.executed.lock().unwrap();
            executed.push(statement.to_string());
            executed.len() - 1
        };

        if let Some((fail_index, kind)) = self.fail_on {
            if fail_index == index {
                return Err(match kind {
                    StoreErrorKind::Rejected => KgbError::rejected("Invalid input 'I'"),
                    StoreErrorKind::Unavailable => KgbError::unavailable("connection reset"),
                });
            }
        }

        if !statement.starts_with("MATCH (n)-[r]->(m) RETURN") {
            return Ok(Vec::new());
        }

        let limit = statement
            .rsplit("LIMIT")
            .next()
            .and_then(|n| n.trim().parse::<usize>().ok())
            .unwrap_or(usize::MAX);

        Ok(self
            .edges
            .iter()
            .take(limit)
            .map(|(source, edge, target)| {
                let row = json!({ "source": source, "edge": edge, "target": target });
                row.as_object().cloned().unwrap_or_default()
            })
            .collect())
    }
}
