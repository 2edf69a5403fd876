//! Vergabe frischer IDs fuer neu hinzugefuegte Punkte.

use std::time::{SystemTime, UNIX_EPOCH};

/// Zeitbasierter, streng monotoner ID-Generator (`new_<millis>`).
///
/// Mehrere IDs in derselben Millisekunde bekommen aufsteigende Werte.
#[derive(Debug, Clone, Default)]
pub struct PointIdGenerator {
    last_issued: u128,
}

impl PointIdGenerator {
    /// Praefix neu vergebener IDs.
    pub const PREFIX: &'static str = "new_";

    /// Erstellt einen Generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergibt die naechste ID, die `is_taken` nicht als belegt meldet.
    pub fn next_id(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let mut candidate = now.max(self.last_issued + 1);
        loop {
            let id = format!("{}{}", Self::PREFIX, candidate);
            if !is_taken(&id) {
                self.last_issued = candidate;
                return id;
            }
            candidate += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_within_same_millisecond() {
        let mut generator = PointIdGenerator::new();
        let ids: HashSet<String> = (0..100).map(|_| generator.next_id(|_| false)).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn skips_ids_already_in_use() {
        let mut generator = PointIdGenerator::new();
        let first = generator.next_id(|_| false);
        let mut rewound = PointIdGenerator {
            last_issued: generator.last_issued - 1,
        };
        let second = rewound.next_id(|id| id == first);
        assert_ne!(first, second);
        assert!(second.starts_with(PointIdGenerator::PREFIX));
    }
}
