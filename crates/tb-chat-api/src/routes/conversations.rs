//! Conversation endpoints: inbound messages, member joins, state lookup.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use tb_protocol::{ConversationState, Member};

use crate::error::ApiResult;
use crate::state::AppState;

/// Inbound user message.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

/// Members-joined event. `bot_id` falls back to the configured bot id.
#[derive(Debug, Deserialize)]
pub struct MembersRequest {
    #[serde(default)]
    pub bot_id: Option<String>,
    pub members: Vec<Member>,
}

/// Replies the channel should post, in order.
#[derive(Debug, Serialize)]
pub struct RepliesResponse {
    pub conversation_id: String,
    pub replies: Vec<String>,
}

/// POST /api/v1/conversations/:id/messages: run one turn.
pub async fn post_message(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> ApiResult<Json<RepliesResponse>> {
    let replies = state
        .dialogue
        .handle_message(&conversation_id, &req.text)
        .await?;

    Ok(Json(RepliesResponse {
        conversation_id,
        replies,
    }))
}

/// POST /api/v1/conversations/:id/members: greet newcomers.
pub async fn post_members(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Json(req): Json<MembersRequest>,
) -> ApiResult<Json<RepliesResponse>> {
    let bot_id = req.bot_id.as_deref().unwrap_or(&state.bot_id);
    let replies = state
        .dialogue
        .handle_members_joined(&conversation_id, bot_id, &req.members)
        .await?;

    Ok(Json(RepliesResponse {
        conversation_id,
        replies,
    }))
}

/// GET /api/v1/conversations/:id: stored slot memory.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<ConversationState>> {
    let conversation = state.dialogue.state(&conversation_id).await?;
    Ok(Json(conversation))
}
