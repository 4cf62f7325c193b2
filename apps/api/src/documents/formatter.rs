//! Seam between the upload handler and the completion API.
//!
//! `AppState` holds an `Arc<dyn ProfileFormatter>`; production wires in
//! `LlmClient`, tests swap in stubs.

use async_trait::async_trait;

use crate::llm_client::{ChatMessage, LlmClient, LlmError};

#[async_trait]
pub trait ProfileFormatter: Send + Sync {
    /// Rewrites extracted document text into the profile description layout.
    async fn format_profile(&self, text: &str) -> Result<ChatMessage, LlmError>;
}

#[async_trait]
impl ProfileFormatter for LlmClient {
    async fn format_profile(&self, text: &str) -> Result<ChatMessage, LlmError> {
        self.reformat(text).await
    }
}
