//! Conversation state queries and the PostgreSQL `ConversationStore`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use tb_dialogue::{ConversationStore, StoreError, StoreResult};
use tb_protocol::{ConversationState, MeasurementSet, TurbineSelection};

/// Conversation row returned from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConversationRow {
    pub conversation_id: String,
    pub selected_turbine: String,
    pub pending_options: serde_json::Value,
    pub greeted: bool,
    pub updated_at: DateTime<Utc>,
}

impl ConversationRow {
    pub fn into_state(self) -> StoreResult<ConversationState> {
        let selected_turbine: TurbineSelection = self
            .selected_turbine
            .parse()
            .map_err(|e: tb_protocol::UnknownSelection| StoreError::Corrupt(e.to_string()))?;
        let pending_options: MeasurementSet = serde_json::from_value(self.pending_options)
            .map_err(|e| StoreError::Corrupt(format!("pending_options: {e}")))?;
        Ok(ConversationState {
            selected_turbine,
            pending_options,
            greeted: self.greeted,
        })
    }
}

/// Get a conversation by id.
pub async fn get(
    pool: &PgPool,
    conversation_id: &str,
) -> Result<Option<ConversationRow>, sqlx::Error> {
    sqlx::query_as::<_, ConversationRow>(
        "SELECT conversation_id, selected_turbine, pending_options, greeted, updated_at
         FROM conversations WHERE conversation_id = $1",
    )
    .bind(conversation_id)
    .fetch_optional(pool)
    .await
}

/// Insert or replace a conversation's state.
pub async fn upsert(
    pool: &PgPool,
    conversation_id: &str,
    state: &ConversationState,
) -> Result<(), sqlx::Error> {
    let options = serde_json::to_value(&state.pending_options)
        .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
    sqlx::query(
        "INSERT INTO conversations (conversation_id, selected_turbine, pending_options, greeted, updated_at)
         VALUES ($1, $2, $3, $4, now())
         ON CONFLICT (conversation_id) DO UPDATE
         SET selected_turbine = EXCLUDED.selected_turbine,
             pending_options = EXCLUDED.pending_options,
             greeted = EXCLUDED.greeted,
             updated_at = now()",
    )
    .bind(conversation_id)
    .bind(state.selected_turbine.as_key())
    .bind(options)
    .bind(state.greeted)
    .execute(pool)
    .await?;
    Ok(())
}

/// `ConversationStore` over the `conversations` table.
pub struct PgConversationStore {
    pool: PgPool,
}

impl PgConversationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl ConversationStore for PgConversationStore {
    async fn load(&self, conversation_id: &str) -> StoreResult<ConversationState> {
        match get(&self.pool, conversation_id).await.map_err(backend)? {
            Some(row) => row.into_state(),
            None => Ok(ConversationState::default()),
        }
    }

    async fn save(&self, conversation_id: &str, state: &ConversationState) -> StoreResult<()> {
        upsert(&self.pool, conversation_id, state)
            .await
            .map_err(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_protocol::{Measurement, Turbine};

    fn row(selected: &str, options: serde_json::Value) -> ConversationRow {
        ConversationRow {
            conversation_id: "c1".into(),
            selected_turbine: selected.into(),
            pending_options: options,
            greeted: true,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn row_decodes_to_state() {
        let state = row("berta", serde_json::json!(["generation", "wind"]))
            .into_state()
            .unwrap();
        assert_eq!(state.selected_turbine, TurbineSelection::One(Turbine::Berta));
        assert_eq!(
            state.pending_options.as_slice(),
            &[Measurement::Generation, Measurement::Wind]
        );
        assert!(state.greeted);
    }

    #[test]
    fn unknown_selection_is_corrupt() {
        let err = row("dos", serde_json::json!([])).into_state().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn bad_options_are_corrupt() {
        let err = row("all", serde_json::json!(["humedad"]))
            .into_state()
            .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
