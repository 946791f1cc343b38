//! E2E tests for member greetings, the help reply and the status endpoint.

mod helpers;

use std::sync::Arc;

use helpers::{BOT_ID, TestHarness};
use tb_dialogue::messages;
use tb_protocol::Turbine;
use tb_telemetry::{MockTelemetry, MockWindSensor};

fn harness_with_stopped(stopped: &[Turbine]) -> TestHarness {
    let mut telemetry = MockTelemetry::with_sample_readings();
    for t in stopped {
        telemetry = telemetry.with_operating(*t, false);
    }
    TestHarness::with_sources(Arc::new(telemetry), Arc::new(MockWindSensor::with_speed(5.0)))
}

/// The bot joining triggers nothing; the first human is greeted once.
#[tokio::test]
async fn e2e_greeting_once_per_conversation() {
    let h = TestHarness::with_sample_data();

    assert!(h.members_joined("c1", &[(BOT_ID, "Turbina")]).await.is_empty());
    assert!(h.stored("c1").await.is_none());

    let replies = h.members_joined("c1", &[("u1", "Ana")]).await;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with(
        "Hola Ana, las turbinas Arthas, Berta y Carlamagna están generando. Te puedo decir:"
    ));
    assert!(replies[0].contains("● Cuanto giran (RPM)"));

    assert!(h.members_joined("c1", &[("u2", "Luis")]).await.is_empty());
    assert!(h.stored("c1").await.unwrap().greeted);
}

/// Greeting mentions only the turbines that are running.
#[tokio::test]
async fn e2e_greeting_with_one_turbine_running() {
    let h = harness_with_stopped(&[Turbine::Arthas, Turbine::Carlamagna]);

    let replies = h.members_joined("c1", &[("u1", "Ana")]).await;
    assert!(replies[0].starts_with("Hola Ana, la turbina Berta está generando. Te puedo decir:"));
}

/// Being greeted does not disturb slot memory, and vice versa.
#[tokio::test]
async fn e2e_greeting_and_slots_coexist() {
    let h = TestHarness::with_sample_data();

    h.say("c1", "carla genera?").await;
    h.members_joined("c1", &[("u1", "Ana")]).await;

    let state = h.stored("c1").await.unwrap();
    assert!(state.greeted);
    assert_eq!(
        h.say("c1", "y ahora?").await,
        vec!["La turbina Carlamagna está generando 4 A a 10 V."]
    );
    assert!(h.stored("c1").await.unwrap().greeted);
}

#[tokio::test]
async fn e2e_help_lists_running_turbines() {
    let h = harness_with_stopped(&[Turbine::Carlamagna]);

    assert_eq!(
        h.say("c1", "ayuda").await,
        vec![messages::help(Some("las turbinas Arthas y Berta"))]
    );
    assert!(h.stored("c1").await.is_none());
}

#[tokio::test]
async fn e2e_help_when_nothing_runs() {
    let h = harness_with_stopped(&Turbine::ALL);

    assert_eq!(h.say("c1", "help").await, vec![messages::NONE_RUNNING]);
}

/// Status-only questions use the operating flags, not the readings.
#[tokio::test]
async fn e2e_status_questions() {
    let h = harness_with_stopped(&[Turbine::Berta]);

    assert_eq!(
        h.say("c1", "funciona berta?").await,
        vec!["La turbina Berta no está generando."]
    );
    assert_eq!(
        h.say("c1", "y las turbinas?").await,
        vec!["las turbinas Arthas y Carlamagna están generando."]
    );
}

#[tokio::test]
async fn e2e_status_endpoint() {
    let h = harness_with_stopped(&[Turbine::Berta]);

    let (status, json) = h.get("/api/v1/turbines/status").await;
    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["all_operating"], false);
    assert_eq!(json["turbines"]["Berta"], false);

    let h = TestHarness::with_sample_data();
    let (_, json) = h.get("/api/v1/turbines/status").await;
    assert_eq!(json["all_operating"], true);
}
