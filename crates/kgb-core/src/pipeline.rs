//! One user action: route, then generate or answer.
//!
//! The pipeline borrows its collaborators for the duration of a request.
//! It keeps no state between runs and performs no retries.

use serde::Serialize;
use tracing::{info, warn};

use crate::executor::render_context;
use crate::prompts::answer_human_turn;
use crate::{
    execute_batch, extract, fetch_context, route, CypherStatement, ExecutionResult,
    GraphEdgeView, GraphStore, Intent, KgbError, KgbResult, ModelInvoker, PromptStore,
    StatementFailure, StoreErrorKind, CONTEXT_LIMIT,
};

/// What a pipeline run did.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "intent", rename_all = "UPPERCASE")]
pub enum PipelineOutcome {
    /// Statements were extracted from the generation reply and executed.
    Generate {
        statements: Vec<CypherStatement>,
        result: ExecutionResult,
    },
    /// The question was answered from the graph context.
    Answer {
        answer: String,
        context: Vec<GraphEdgeView>,
    },
    /// The routing reply named neither intent; nothing else was done.
    Unknown { reply: String },
}

impl PipelineOutcome {
    pub fn intent(&self) -> Intent {
        match self {
            Self::Generate { .. } => Intent::Generate,
            Self::Answer { .. } => Intent::Answer,
            Self::Unknown { .. } => Intent::Unknown,
        }
    }

    /// The statement that stopped the write batch, if any.
    pub fn batch_failure(&self) -> Option<&StatementFailure> {
        match self {
            Self::Generate { result, .. } => result.failure.as_ref(),
            _ => None,
        }
    }

    /// True when the write batch stopped because the store went away.
    pub fn store_unavailable(&self) -> bool {
        self.batch_failure()
            .is_some_and(|f| f.kind == StoreErrorKind::Unavailable)
    }

    /// True when generation ran but no statement passed validation.
    pub fn is_extraction_empty(&self) -> bool {
        matches!(self, Self::Generate { statements, .. } if statements.is_empty())
    }
}

/// Request-scoped wiring of model, store and prompts.
pub struct Pipeline<'a> {
    model: &'a dyn ModelInvoker,
    store: &'a dyn GraphStore,
    prompts: &'a PromptStore,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        model: &'a dyn ModelInvoker,
        store: &'a dyn GraphStore,
        prompts: &'a PromptStore,
    ) -> Self {
        Self {
            model,
            store,
            prompts,
        }
    }

    /// Run one user action.
    pub async fn run(&self, text: &str) -> KgbResult<PipelineOutcome> {
        if text.trim().is_empty() {
            return Err(KgbError::EmptyInput);
        }

        let (intent, reply) = route(self.model, self.prompts, text).await?;
        match intent {
            Intent::Generate => self.generate(text).await,
            Intent::Answer => self.answer(text).await,
            Intent::Unknown => {
                warn!(reply = %reply.trim(), "Routing reply named no known intent");
                Ok(PipelineOutcome::Unknown { reply })
            }
        }
    }

    /// Ask the model for Cypher and write it to the store.
    pub async fn generate(&self, text: &str) -> KgbResult<PipelineOutcome> {
        let raw = self.model.complete(self.prompts.generate(), text).await?;
        let statements = extract(&raw);

        if statements.is_empty() {
            warn!("No valid Cypher statements in the generation reply");
            return Ok(PipelineOutcome::Generate {
                statements,
                result: ExecutionResult::default(),
            });
        }

        let result = execute_batch(self.store, &statements).await;
        Ok(PipelineOutcome::Generate { statements, result })
    }

    /// Answer a question from the edges currently in the store.
    pub async fn answer(&self, question: &str) -> KgbResult<PipelineOutcome> {
        let context = fetch_context(self.store, CONTEXT_LIMIT).await?;
        let human = answer_human_turn(&render_context(&context), question);
        let answer = self.model.complete(self.prompts.answer(), &human).await?;

        info!(context_edges = context.len(), "Answered question");
        Ok(PipelineOutcome::Answer { answer, context })
    }
}
