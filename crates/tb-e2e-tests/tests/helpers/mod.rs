//! Shared test harness for E2E conversation tests.
//!
//! Drives the real router, dialogue pipeline and in-memory store, with
//! scripted telemetry standing in for the turbines.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use tb_chat_api::routes::build_router;
use tb_chat_api::state::AppState;
use tb_dialogue::InMemoryStore;
use tb_protocol::ConversationState;
use tb_telemetry::{MockTelemetry, MockWindSensor, TelemetryProvider, WindSensor};

pub const BOT_ID: &str = "turbina-alpha";

/// Router plus direct access to the store behind it.
pub struct TestHarness {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

impl TestHarness {
    /// Sample readings on all three turbines, 5 m/s of wind.
    pub fn with_sample_data() -> Self {
        Self::with_sources(
            Arc::new(MockTelemetry::with_sample_readings()),
            Arc::new(MockWindSensor::with_speed(5.0)),
        )
    }

    pub fn with_sources(
        telemetry: Arc<dyn TelemetryProvider>,
        wind: Arc<dyn WindSensor>,
    ) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let state = AppState::with_parts(store.clone(), telemetry, wind, BOT_ID);
        Self {
            router: build_router(state),
            store,
        }
    }

    /// POST a user message. Returns (HTTP status, response JSON).
    pub async fn send_message(
        &self,
        conversation_id: &str,
        text: &str,
    ) -> (StatusCode, serde_json::Value) {
        let uri = format!("/api/v1/conversations/{conversation_id}/messages");
        self.post(&uri, serde_json::json!({ "text": text })).await
    }

    /// POST a user message and return only the replies.
    pub async fn say(&self, conversation_id: &str, text: &str) -> Vec<String> {
        let (status, json) = self.send_message(conversation_id, text).await;
        assert_eq!(status, StatusCode::OK, "unexpected response: {json}");
        replies(&json)
    }

    /// POST a members-joined event with `(id, name)` pairs.
    pub async fn members_joined(
        &self,
        conversation_id: &str,
        members: &[(&str, &str)],
    ) -> Vec<String> {
        let uri = format!("/api/v1/conversations/{conversation_id}/members");
        let members: Vec<serde_json::Value> = members
            .iter()
            .map(|(id, name)| serde_json::json!({ "id": id, "name": name }))
            .collect();
        let (status, json) = self
            .post(&uri, serde_json::json!({ "members": members }))
            .await;
        assert_eq!(status, StatusCode::OK, "unexpected response: {json}");
        replies(&json)
    }

    /// GET a JSON resource.
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    /// Stored state, or `None` if the conversation was never saved.
    pub async fn stored(&self, conversation_id: &str) -> Option<ConversationState> {
        self.store.get(conversation_id).await
    }

    async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }
}

async fn read(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn replies(json: &serde_json::Value) -> Vec<String> {
    json["replies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().unwrap().to_string())
        .collect()
}
