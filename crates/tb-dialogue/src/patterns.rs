//! Slot pattern tables.
//!
//! Each table maps a regex over normalized (trimmed, lower-cased) text to
//! the slot it fills. Tables are plain data; the resolvers decide what a
//! combination of hits means.

use regex::Regex;
use std::sync::LazyLock;

use tb_protocol::{Measurement, MeasurementSet, Turbine};

// Specific turbines, one pattern each
static TURBINE_PATTERNS: LazyLock<Vec<(Turbine, Regex)>> = LazyLock::new(|| {
    vec![
        (Turbine::Arthas, Regex::new(r"arthas").unwrap()),
        (Turbine::Berta, Regex::new(r"(turbina )?berta").unwrap()),
        (
            Turbine::Carlamagna,
            Regex::new(r"(turbina )?carla(magna)?").unwrap(),
        ),
    ]
});

// "All turbines" without naming any
static ALL_TURBINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"turbinas|tod(e|a)s").unwrap());

static HELP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ayuda|help").unwrap());

// Measurement synonyms
fn measurement_pattern(m: Measurement) -> &'static str {
    match m {
        Measurement::Status => r"estado(s)?|funcion(a|ando)?|and(a|ando|an)?",
        Measurement::Generation => r"gener(ando|a|an)?|produc(e|en|iendo)",
        Measurement::Load => r"carga|nivel|bater(i|í)a|pila|energ(i|í)a",
        Measurement::Rotation => r"gira(ndo|n)?|re(v|b)oluci(o|ó)n(es)?|vuelta|rpm",
        Measurement::Wind => r"viento|brisa|aire|sopla(ndo)?|ventisca",
    }
}

// One entry per measurement, in canonical evaluation order
static MEASUREMENT_PATTERNS: LazyLock<Vec<(Measurement, Regex)>> = LazyLock::new(|| {
    Measurement::CANONICAL
        .into_iter()
        .map(|m| (m, Regex::new(measurement_pattern(m)).unwrap()))
        .collect()
});

/// Which specific turbines a message names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurbineMentions {
    pub arthas: bool,
    pub berta: bool,
    pub carlamagna: bool,
}

impl TurbineMentions {
    /// Number of distinct turbines named.
    pub fn count(&self) -> usize {
        [self.arthas, self.berta, self.carlamagna]
            .iter()
            .filter(|hit| **hit)
            .count()
    }

    /// The named turbine, if exactly one was named.
    pub fn single(&self) -> Option<Turbine> {
        if self.count() != 1 {
            return None;
        }
        Turbine::ALL.into_iter().find(|t| self.contains(*t))
    }

    pub fn contains(&self, turbine: Turbine) -> bool {
        match turbine {
            Turbine::Arthas => self.arthas,
            Turbine::Berta => self.berta,
            Turbine::Carlamagna => self.carlamagna,
        }
    }

    fn set(&mut self, turbine: Turbine) {
        match turbine {
            Turbine::Arthas => self.arthas = true,
            Turbine::Berta => self.berta = true,
            Turbine::Carlamagna => self.carlamagna = true,
        }
    }
}

/// Normalize raw message text for pattern matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Test every turbine pattern independently.
pub fn mentioned_turbines(text: &str) -> TurbineMentions {
    let mut mentions = TurbineMentions::default();
    for (turbine, re) in TURBINE_PATTERNS.iter() {
        if re.is_match(text) {
            mentions.set(*turbine);
        }
    }
    mentions
}

/// Whether the message refers to "the turbines" / "all" generically.
pub fn mentions_all(text: &str) -> bool {
    ALL_TURBINES.is_match(text)
}

pub fn asks_for_help(text: &str) -> bool {
    HELP.is_match(text)
}

/// Every measurement whose pattern matches, in canonical order.
pub fn matched_measurements(text: &str) -> MeasurementSet {
    MEASUREMENT_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(m, _)| *m)
        .collect()
}
