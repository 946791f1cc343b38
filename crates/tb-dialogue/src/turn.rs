//! One conversation turn, start to finish, against an explicit state value.
//!
//! Nothing here touches storage: the caller passes the prior state in and
//! persists `next_state` if one is returned.

use tb_protocol::{ConversationState, Member, OperatingStatusMap};
use tb_telemetry::{TelemetryProvider, WindSensor};

use crate::carry_over::{TurnPlan, plan_turn};
use crate::{composer, messages, patterns, resolver, shout, status};

/// Result of processing one inbound event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    /// Messages to send back, in order.
    pub replies: Vec<String>,
    /// State to persist. `None` means leave the stored state untouched.
    pub next_state: Option<ConversationState>,
}

/// Process a user message.
pub async fn process_turn(
    prior: &ConversationState,
    raw_text: &str,
    telemetry: &dyn TelemetryProvider,
    wind: &dyn WindSensor,
) -> TurnOutcome {
    let mut replies = Vec::new();

    if shout::is_mostly_upper(raw_text) {
        replies.push(messages::SHOUT_NOTICE.to_string());
    }

    let text = patterns::normalize(raw_text);

    if patterns::asks_for_help(&text) {
        let map = operating_map(telemetry).await;
        let running = status::operating_fragment(&map, true, false);
        replies.push(messages::help(running.as_deref()));
        return TurnOutcome {
            replies,
            next_state: None,
        };
    }

    let selection = match resolver::resolve_turbine(&text, prior.selected_turbine) {
        Ok(selection) => selection,
        Err(e) => {
            tracing::debug!(error = %e, "turbine pair rejected");
            replies.push(messages::PAIRED_TURBINES.to_string());
            return TurnOutcome {
                replies,
                next_state: None,
            };
        }
    };
    let resolved = resolver::resolve_measurements(&text);

    tracing::debug!(
        selection = ?selection,
        measurements = ?resolved.as_slice(),
        "slots resolved"
    );

    match plan_turn(selection, resolved, prior) {
        TurnPlan::Prompt(prompts) => {
            replies.extend(prompts);
            TurnOutcome {
                replies,
                next_state: None,
            }
        }
        TurnPlan::Answer {
            selection,
            measurements,
            next_state,
        } => {
            let reply = composer::compose(selection, &measurements, telemetry, wind).await;
            replies.push(reply);
            TurnOutcome {
                replies,
                next_state: Some(next_state),
            }
        }
    }
}

/// Welcome members who just joined, once per conversation.
///
/// The bot's own join event (`member.id == bot_id`) is ignored.
pub async fn greet_members(
    prior: &ConversationState,
    bot_id: &str,
    members: &[Member],
    telemetry: &dyn TelemetryProvider,
) -> TurnOutcome {
    if prior.greeted {
        return TurnOutcome::default();
    }

    let newcomers: Vec<&Member> = members.iter().filter(|m| m.id != bot_id).collect();
    if newcomers.is_empty() {
        return TurnOutcome::default();
    }

    let map = operating_map(telemetry).await;
    let running = status::operating_fragment(&map, true, true);
    let replies = newcomers
        .iter()
        .map(|m| messages::welcome(&m.name, running.as_deref()))
        .collect();

    TurnOutcome {
        replies,
        next_state: Some(ConversationState {
            greeted: true,
            ..prior.clone()
        }),
    }
}

async fn operating_map(telemetry: &dyn TelemetryProvider) -> OperatingStatusMap {
    telemetry.all_operating_status().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "operating status map unavailable");
        OperatingStatusMap::new()
    })
}
