//! KGB Core Library
//!
//! Intent routing, Cypher extraction and query execution for the
//! Knowledge Graph Builder. Talks to the language model and the graph
//! store only through the [`ModelInvoker`] and [`GraphStore`] traits.

pub mod config;
pub mod cypher;
pub mod error;
pub mod executor;
pub mod intent;
pub mod model;
pub mod pipeline;
pub mod prompts;
pub mod router;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use config::AppConfig;
pub use cypher::{extract, CypherStatement};
pub use error::{KgbError, KgbResult, StoreErrorKind};
pub use executor::{
    execute_batch, fetch_context, ExecutionResult, GraphEdgeView, StatementFailure,
    CONTEXT_LIMIT,
};
pub use intent::Intent;
pub use model::ModelInvoker;
pub use pipeline::{Pipeline, PipelineOutcome};
pub use prompts::PromptStore;
pub use router::route;
pub use store::{GraphStore, Record};
