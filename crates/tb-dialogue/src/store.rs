//! Per-conversation state storage.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use tb_protocol::ConversationState;

use crate::error::StoreResult;

/// Keyed storage for [`ConversationState`].
///
/// A conversation that has never been saved loads as the default state.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn load(&self, conversation_id: &str) -> StoreResult<ConversationState>;

    async fn save(&self, conversation_id: &str, state: &ConversationState) -> StoreResult<()>;
}

/// Process-local store, used when no database is configured and in tests.
#[derive(Default)]
pub struct InMemoryStore {
    states: RwLock<HashMap<String, ConversationState>>,
    saves: RwLock<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls so far.
    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }

    /// Stored state for `conversation_id`, without defaulting.
    pub async fn get(&self, conversation_id: &str) -> Option<ConversationState> {
        self.states.read().await.get(conversation_id).cloned()
    }
}

#[async_trait]
impl ConversationStore for InMemoryStore {
    async fn load(&self, conversation_id: &str) -> StoreResult<ConversationState> {
        Ok(self.get(conversation_id).await.unwrap_or_default())
    }

    async fn save(&self, conversation_id: &str, state: &ConversationState) -> StoreResult<()> {
        self.states
            .write()
            .await
            .insert(conversation_id.to_string(), state.clone());
        *self.saves.write().await += 1;
        Ok(())
    }
}
