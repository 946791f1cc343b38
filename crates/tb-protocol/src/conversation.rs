use serde::{Deserialize, Serialize};

use crate::measurement::MeasurementSet;
use crate::turbine::TurbineSelection;

/// Per-conversation slot memory carried between turns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversationState {
    /// Turbine(s) the conversation is about.
    #[serde(default)]
    pub selected_turbine: TurbineSelection,
    /// Measurements asked for most recently. Drives response order.
    #[serde(default)]
    pub pending_options: MeasurementSet,
    /// Whether the welcome message was already sent.
    #[serde(default)]
    pub greeted: bool,
}

/// A participant that joined a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
}
