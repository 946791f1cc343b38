//! Store-backed dialogue orchestrator.
//!
//! Each inbound event loads the conversation state once, runs the pure
//! turn logic, and saves at most once. Events on the same conversation are
//! serialized; different conversations run concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use tb_protocol::{ConversationState, Member};
use tb_telemetry::{TelemetryProvider, WindSensor};

use crate::error::DialogueResult;
use crate::store::ConversationStore;
use crate::turn::{self, TurnOutcome};

pub struct Dialogue {
    store: Arc<dyn ConversationStore>,
    telemetry: Arc<dyn TelemetryProvider>,
    wind: Arc<dyn WindSensor>,
    /// One lock per conversation with a turn in flight.
    turn_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Dialogue {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        telemetry: Arc<dyn TelemetryProvider>,
        wind: Arc<dyn WindSensor>,
    ) -> Self {
        Self {
            store,
            telemetry,
            wind,
            turn_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn telemetry(&self) -> &dyn TelemetryProvider {
        self.telemetry.as_ref()
    }

    /// Current stored state of a conversation.
    pub async fn state(&self, conversation_id: &str) -> DialogueResult<ConversationState> {
        Ok(self.store.load(conversation_id).await?)
    }

    /// Handle a user message and return the replies to send.
    pub async fn handle_message(
        &self,
        conversation_id: &str,
        text: &str,
    ) -> DialogueResult<Vec<String>> {
        let lock = self.acquire(conversation_id).await;
        let result = {
            let _turn = lock.lock().await;
            self.message_turn(conversation_id, text).await
        };
        self.release(conversation_id, lock).await;
        result
    }

    /// Handle a members-joined event.
    pub async fn handle_members_joined(
        &self,
        conversation_id: &str,
        bot_id: &str,
        members: &[Member],
    ) -> DialogueResult<Vec<String>> {
        let lock = self.acquire(conversation_id).await;
        let result = {
            let _turn = lock.lock().await;
            self.members_turn(conversation_id, bot_id, members).await
        };
        self.release(conversation_id, lock).await;
        result
    }

    async fn message_turn(&self, conversation_id: &str, text: &str) -> DialogueResult<Vec<String>> {
        let prior = self.store.load(conversation_id).await?;
        let outcome =
            turn::process_turn(&prior, text, self.telemetry.as_ref(), self.wind.as_ref()).await;

        tracing::info!(
            conversation_id,
            replies = outcome.replies.len(),
            state_changed = outcome.next_state.is_some(),
            "message handled"
        );
        self.commit(conversation_id, outcome).await
    }

    async fn members_turn(
        &self,
        conversation_id: &str,
        bot_id: &str,
        members: &[Member],
    ) -> DialogueResult<Vec<String>> {
        let prior = self.store.load(conversation_id).await?;
        let outcome =
            turn::greet_members(&prior, bot_id, members, self.telemetry.as_ref()).await;

        tracing::info!(
            conversation_id,
            members = members.len(),
            greeted = !outcome.replies.is_empty(),
            "members joined"
        );
        self.commit(conversation_id, outcome).await
    }

    /// Lock handle for `conversation_id`, created on first use.
    async fn acquire(&self, conversation_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.turn_locks.lock().await;
        locks.entry(conversation_id.to_string()).or_default().clone()
    }

    /// Drop our handle and evict the entry once nobody else holds it.
    async fn release(&self, conversation_id: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.turn_locks.lock().await;
        drop(lock);
        if locks
            .get(conversation_id)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(conversation_id);
        }
    }

    async fn commit(
        &self,
        conversation_id: &str,
        outcome: TurnOutcome,
    ) -> DialogueResult<Vec<String>> {
        if let Some(next) = &outcome.next_state {
            self.store.save(conversation_id, next).await?;
        }
        Ok(outcome.replies)
    }
}
