use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the named turbines on site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turbine {
    Arthas,
    Berta,
    Carlamagna,
}

impl Turbine {
    /// Every turbine, in display order.
    pub const ALL: [Turbine; 3] = [Turbine::Arthas, Turbine::Berta, Turbine::Carlamagna];

    /// Name used in replies and in the operating-status map.
    pub fn display_name(self) -> &'static str {
        match self {
            Turbine::Arthas => "Arthas",
            Turbine::Berta => "Berta",
            Turbine::Carlamagna => "Carlamagna",
        }
    }
}

impl fmt::Display for Turbine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which turbine(s) a conversation is currently talking about.
///
/// Only "one specific turbine" or "all of them" are representable; a pair
/// is rejected during resolution and never reaches the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "turbine")]
pub enum TurbineSelection {
    One(Turbine),
    All,
    #[default]
    Unselected,
}

impl TurbineSelection {
    /// Turbines in scope for a telemetry query, in display order.
    pub fn turbines(self) -> Vec<Turbine> {
        match self {
            TurbineSelection::One(t) => vec![t],
            TurbineSelection::All => Turbine::ALL.to_vec(),
            TurbineSelection::Unselected => Vec::new(),
        }
    }

    pub fn is_unselected(self) -> bool {
        self == TurbineSelection::Unselected
    }

    /// Stable storage key ("arthas", "all", "unselected", ...).
    pub fn as_key(self) -> &'static str {
        match self {
            TurbineSelection::One(Turbine::Arthas) => "arthas",
            TurbineSelection::One(Turbine::Berta) => "berta",
            TurbineSelection::One(Turbine::Carlamagna) => "carlamagna",
            TurbineSelection::All => "all",
            TurbineSelection::Unselected => "unselected",
        }
    }
}

/// Error parsing a stored selection key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown turbine selection: {0}")]
pub struct UnknownSelection(pub String);

impl FromStr for TurbineSelection {
    type Err = UnknownSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arthas" => Ok(TurbineSelection::One(Turbine::Arthas)),
            "berta" => Ok(TurbineSelection::One(Turbine::Berta)),
            "carlamagna" => Ok(TurbineSelection::One(Turbine::Carlamagna)),
            "all" => Ok(TurbineSelection::All),
            "unselected" => Ok(TurbineSelection::Unselected),
            other => Err(UnknownSelection(other.to_string())),
        }
    }
}
