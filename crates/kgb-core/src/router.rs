//! Intent routing.

use tracing::{debug, info};

use crate::{Intent, KgbError, KgbResult, ModelInvoker, PromptStore};

/// Classify free text with one model call.
///
/// Callers must reject empty input beforehand. A failed model call is
/// surfaced as [`KgbError::Router`] rather than defaulting to an intent.
pub async fn route<M>(model: &M, prompts: &PromptStore, text: &str) -> KgbResult<(Intent, String)>
where
    M: ModelInvoker + ?Sized,
{
    let reply = model
        .complete(prompts.router(), text)
        .await
        .map_err(|e| KgbError::Router(e.to_string()))?;

    let intent = Intent::classify(&reply);
    debug!(reply = %reply.trim(), "Routing reply");
    info!(%intent, "Routed request");
    Ok((intent, reply))
}
