//! Turn-processing pipeline for the turbine chat bot.
//!
//! A turn flows through:
//! - `patterns`: declarative regex tables for turbines and measurements
//! - `resolver`: turbine (single/all/pair error) and measurement slots
//! - `carry_over`: merge with prior state, or prompt for a missing slot
//! - `status` / `composer`: query telemetry and render the Spanish reply
//!
//! `turn::process_turn` runs one turn against an explicit state value;
//! `Dialogue` wraps it with a `ConversationStore`.

pub mod carry_over;
pub mod composer;
pub mod dialogue;
pub mod error;
pub mod messages;
pub mod patterns;
pub mod resolver;
pub mod shout;
pub mod status;
pub mod store;
pub mod turn;

pub use dialogue::Dialogue;
pub use error::{DialogueError, DialogueResult, StoreError, StoreResult};
pub use store::{ConversationStore, InMemoryStore};
pub use turn::{TurnOutcome, greet_members, process_turn};
