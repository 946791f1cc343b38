use serde::{Deserialize, Serialize};

/// A measurement the user can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    /// Whether the turbine is generating at all.
    Status,
    /// Amperage and voltage.
    Generation,
    /// Battery charge percentage.
    Load,
    /// Rotor RPM.
    Rotation,
    /// Ambient wind speed. Independent of any turbine.
    Wind,
}

impl Measurement {
    /// Evaluation order used when matching a message.
    pub const CANONICAL: [Measurement; 5] = [
        Measurement::Status,
        Measurement::Generation,
        Measurement::Load,
        Measurement::Rotation,
        Measurement::Wind,
    ];
}

/// Ordered set of measurements. Distinct, insertion order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementSet(Vec<Measurement>);

impl MeasurementSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a measurement unless already present. Returns whether it was added.
    pub fn insert(&mut self, m: Measurement) -> bool {
        if self.0.contains(&m) {
            return false;
        }
        self.0.push(m);
        true
    }

    /// Remove a measurement. Returns whether it was present.
    pub fn remove(&mut self, m: Measurement) -> bool {
        match self.0.iter().position(|x| *x == m) {
            Some(i) => {
                self.0.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, m: Measurement) -> bool {
        self.0.contains(&m)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Measurement> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Measurement] {
        &self.0
    }
}

impl FromIterator<Measurement> for MeasurementSet {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        let mut set = Self::new();
        for m in iter {
            set.insert(m);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order_and_rejects_duplicates() {
        let mut set = MeasurementSet::new();
        assert!(set.insert(Measurement::Rotation));
        assert!(set.insert(Measurement::Generation));
        assert!(!set.insert(Measurement::Rotation));
        assert_eq!(
            set.as_slice(),
            &[Measurement::Rotation, Measurement::Generation]
        );
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut set: MeasurementSet = [Measurement::Wind].into_iter().collect();
        assert!(!set.remove(Measurement::Load));
        assert!(set.remove(Measurement::Wind));
        assert!(set.is_empty());
    }

    #[test]
    fn serializes_as_plain_list() {
        let set: MeasurementSet = [Measurement::Status, Measurement::Wind].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["status","wind"]"#);
    }
}
