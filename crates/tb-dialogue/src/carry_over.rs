//! Conversation state carry-over.
//!
//! Decides whether a turn has enough slots to answer, filling gaps from
//! the prior turn, and produces the state to persist if it does.

use tb_protocol::{ConversationState, MeasurementSet, TurbineSelection};

use crate::messages;

/// What to do with a turn once its slots are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPlan {
    /// Enough information to answer. `next_state` is persisted after replying.
    Answer {
        selection: TurbineSelection,
        measurements: MeasurementSet,
        next_state: ConversationState,
    },
    /// Nothing to answer yet; send these prompts and persist nothing.
    Prompt(Vec<String>),
}

/// Merge this turn's slots with `prior`.
pub fn plan_turn(
    selection: TurbineSelection,
    resolved: MeasurementSet,
    prior: &ConversationState,
) -> TurnPlan {
    let measurements = if resolved.is_empty() {
        if prior.pending_options.is_empty() {
            let mut prompts = vec![messages::ASK_MEASUREMENT.to_string()];
            if selection.is_unselected() {
                prompts.push(messages::ASK_TURBINE.to_string());
            }
            return TurnPlan::Prompt(prompts);
        }
        prior.pending_options.clone()
    } else {
        resolved
    };

    let next_state = ConversationState {
        selected_turbine: selection,
        pending_options: measurements.clone(),
        greeted: prior.greeted,
    };

    TurnPlan::Answer {
        selection,
        measurements,
        next_state,
    }
}
