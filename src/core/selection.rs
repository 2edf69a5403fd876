//! Menge der selektierten Punkt-Indizes.

use indexmap::IndexSet;

/// Selektierte Indizes in die aktive Punktfolge.
///
/// Invariante: jedes Element ist ein gueltiger aktueller Index. Strukturelle
/// Mutationen muessen die Menge remappen oder leeren.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: IndexSet<usize>,
}

impl SelectionSet {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schaltet `index` um. Ausserhalb von `0..len` passiert nichts.
    ///
    /// Gibt `true` zurueck, wenn die Selektion geaendert wurde.
    pub fn toggle(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            log::debug!("Selektion ignoriert: Index {} ausserhalb 0..{}", index, len);
            return false;
        }
        if !self.indices.shift_remove(&index) {
            self.indices.insert(index);
        }
        true
    }

    /// Selektiert `index` (ohne Umschalten).
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.indices.insert(index);
        true
    }

    /// Ist `index` selektiert?
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Anzahl selektierter Punkte.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Gibt `true` zurueck, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Indizes in Selektionsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Indizes aufsteigend sortiert.
    pub fn sorted(&self) -> Vec<usize> {
        let mut sorted: Vec<usize> = self.iter().collect();
        sorted.sort_unstable();
        sorted
    }

    /// Indizes absteigend sortiert (Loesch-Reihenfolge).
    pub fn descending(&self) -> Vec<usize> {
        let mut sorted = self.sorted();
        sorted.reverse();
        sorted
    }

    /// Remap nach Einfuegen an `inserted_at`: alle Indizes >= `inserted_at` ruecken um eins auf.
    pub fn shift_for_insert(&mut self, inserted_at: usize) {
        self.indices = self
            .indices
            .iter()
            .map(|&i| if i >= inserted_at { i + 1 } else { i })
            .collect();
    }

    /// Entfernt alle Indizes, die bei Laenge `len` nicht mehr gueltig sind.
    pub fn retain_valid(&mut self, len: usize) {
        self.indices.retain(|&i| i < len);
    }
}
