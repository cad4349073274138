//! Language model collaborator.

use async_trait::async_trait;

use crate::KgbResult;

/// A text-to-text language model.
///
/// Implementations send `system` as the system instruction and `human` as
/// the user turn, and return the reply text. Timeouts, transport errors,
/// undecodable responses and empty replies are all reported as
/// [`crate::KgbError::Model`]; there is no partial-output handling.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn complete(&self, system: &str, human: &str) -> KgbResult<String>;

    /// Whether the model can currently serve requests.
    async fn is_available(&self) -> bool {
        true
    }
}
