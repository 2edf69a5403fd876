//! Append-only Aenderungsprotokoll fuer die Anzeige "N neu, M geloescht".

use super::PointFeature;
use std::fmt;
use std::time::SystemTime;

/// Art einer protokollierten Aenderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationKind {
    /// Punkt hinzugefuegt
    Added,
    /// Punkt geloescht
    Deleted,
    /// Properties eines Punkts geaendert
    Modified,
}

/// Ein Eintrag im Aenderungsprotokoll.
#[derive(Debug, Clone)]
pub struct ModificationRecord {
    /// Art der Aenderung
    pub kind: ModificationKind,
    /// ID des betroffenen Punkts
    pub point_id: String,
    /// Zustand des Punkts (nachher bei Added/Modified, vorher bei Deleted)
    pub snapshot: PointFeature,
    /// Zeitpunkt der Aenderung
    pub timestamp: SystemTime,
}

/// Zaehler je Aenderungsart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModificationSummary {
    /// Anzahl hinzugefuegter Punkte
    pub added: usize,
    /// Anzahl geloeschter Punkte
    pub deleted: usize,
    /// Anzahl geaenderter Punkte
    pub modified: usize,
}

impl ModificationSummary {
    /// Gibt `true` zurueck, wenn es ungespeicherte Aenderungen gibt.
    pub fn has_changes(&self) -> bool {
        self.added + self.deleted + self.modified > 0
    }
}

impl fmt::Display for ModificationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} deleted, {} modified",
            self.added, self.deleted, self.modified
        )
    }
}

/// Nur anhaengbares Protokoll; geleert wird es nur beim Laden einer neuen Route.
#[derive(Debug, Clone, Default)]
pub struct ModificationLog {
    records: Vec<ModificationRecord>,
}

impl ModificationLog {
    /// Erstellt ein leeres Protokoll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Haengt einen Eintrag mit aktuellem Zeitstempel an.
    pub fn record(&mut self, kind: ModificationKind, point_id: String, snapshot: PointFeature) {
        self.records.push(ModificationRecord {
            kind,
            point_id,
            snapshot,
            timestamp: SystemTime::now(),
        });
    }

    /// Read-only Sicht auf alle Eintraege.
    pub fn records(&self) -> &[ModificationRecord] {
        &self.records
    }

    /// Anzahl der Eintraege.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurueck, wenn keine Eintraege vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Eintraege einer bestimmten Art.
    pub fn of_kind(&self, kind: ModificationKind) -> impl Iterator<Item = &ModificationRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    /// Zaehlt Eintraege je Art.
    pub fn summary(&self) -> ModificationSummary {
        self.records
            .iter()
            .fold(ModificationSummary::default(), |mut acc, record| {
                match record.kind {
                    ModificationKind::Added => acc.added += 1,
                    ModificationKind::Deleted => acc.deleted += 1,
                    ModificationKind::Modified => acc.modified += 1,
                }
                acc
            })
    }

    /// Statuszeile fuer die UI (leer ohne Aenderungen).
    pub fn status_line(&self) -> String {
        let summary = self.summary();
        if summary.has_changes() {
            summary.to_string()
        } else {
            String::new()
        }
    }

    /// Session-Reset (nur beim Laden einer neuen Route).
    pub(crate) fn reset(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LatLng;

    #[test]
    fn summary_counts_per_kind() {
        let mut log = ModificationLog::new();
        let point = PointFeature::new(LatLng::new(0.0, 0.0));
        assert_eq!(log.status_line(), "");

        log.record(ModificationKind::Added, "a".into(), point.clone());
        log.record(ModificationKind::Deleted, "b".into(), point.clone());
        log.record(ModificationKind::Deleted, "c".into(), point);

        let summary = log.summary();
        assert_eq!(summary.added, 1);
        assert_eq!(summary.deleted, 2);
        assert_eq!(log.status_line(), "1 added, 2 deleted, 0 modified");
        assert_eq!(log.of_kind(ModificationKind::Deleted).count(), 2);
    }
}
