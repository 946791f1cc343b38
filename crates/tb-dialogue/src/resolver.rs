//! Slot resolvers.
//!
//! Turbine resolution is exclusive (one, all, or carry the prior value)
//! and rejects pairs. Measurement resolution is a free multi-select.

use tb_protocol::{MeasurementSet, TurbineSelection};

use crate::patterns;

/// The message named exactly two turbines. Only one or all are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("only one turbine or all of them can be queried, not pairs")]
pub struct PairedTurbines;

/// Resolve the turbine slot for a normalized message.
///
/// Naming all three turbines is the same as asking about all of them.
/// Naming none keeps `prior`.
pub fn resolve_turbine(
    text: &str,
    prior: TurbineSelection,
) -> Result<TurbineSelection, PairedTurbines> {
    let mentions = patterns::mentioned_turbines(text);

    match mentions.count() {
        3 => Ok(TurbineSelection::All),
        2 => Err(PairedTurbines),
        1 => Ok(mentions
            .single()
            .map(TurbineSelection::One)
            .unwrap_or(prior)),
        _ if patterns::mentions_all(text) => Ok(TurbineSelection::All),
        _ => Ok(prior),
    }
}

/// Resolve the requested measurements for a normalized message.
pub fn resolve_measurements(text: &str) -> MeasurementSet {
    patterns::matched_measurements(text)
}
