//! Application state.

use std::sync::Arc;

use kgb_core::{GraphStore, ModelInvoker, Pipeline, PromptStore};

/// Handles created at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ModelInvoker>,
    pub store: Arc<dyn GraphStore>,
    pub prompts: Arc<PromptStore>,
}

impl AppState {
    pub fn new(
        model: Arc<dyn ModelInvoker>,
        store: Arc<dyn GraphStore>,
        prompts: PromptStore,
    ) -> Self {
        Self {
            model,
            store,
            prompts: Arc::new(prompts),
        }
    }

    /// Borrow the handles for a single request.
    pub fn pipeline(&self) -> Pipeline<'_> {
        Pipeline::new(self.model.as_ref(), self.store.as_ref(), self.prompts.as_ref())
    }
}
