//! Bestimmt, an welcher Stelle der Punktfolge ein neuer Punkt eingefuegt wird.

use super::geo::haversine_distance;
use super::{LatLng, PointFeature};

/// Gewuenschte Einfuegeposition (Formularfeld "Position").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    /// Neuer Kopf der Route (Index 0)
    Start,
    /// Neues Ende der Route (Index = Laenge)
    #[default]
    End,
    /// Direkt hinter dem naechstgelegenen Punkt
    Custom,
}

impl InsertPosition {
    /// Parst den Formularwert (`start`, `end`, `custom`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Formularwert.
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Custom => "custom",
        }
    }
}

/// Ergebnis der Positionsbestimmung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertResolution {
    /// Kategorie der Position
    pub position: InsertPosition,
    /// Index, an dem eingefuegt wird
    pub insert_index: usize,
}

impl InsertResolution {
    fn new(position: InsertPosition, insert_index: usize) -> Self {
        Self {
            position,
            insert_index,
        }
    }
}

/// Nearest-Neighbour-Heuristik fuer das Einfuegen neuer Punkte.
///
/// Keine routen-optimale Platzierung: es wird nie die ganze Route umsortiert.
pub struct InsertPositionResolver;

impl InsertPositionResolver {
    /// Sucht den naechsten Punkt (lineare Suche, bei Gleichstand der niedrigste Index).
    ///
    /// - leer → `Start`/0
    /// - naechster ist der erste Punkt → `Start`/0
    /// - naechster ist der letzte Punkt → `End`/Laenge
    /// - sonst → `Custom`/naechster + 1
    pub fn resolve(candidate: LatLng, points: &[PointFeature]) -> InsertResolution {
        let Some(closest_index) = Self::closest_index(candidate, points) else {
            return InsertResolution::new(InsertPosition::Start, 0);
        };

        if closest_index == 0 {
            InsertResolution::new(InsertPosition::Start, 0)
        } else if closest_index == points.len() - 1 {
            InsertResolution::new(InsertPosition::End, points.len())
        } else {
            InsertResolution::new(InsertPosition::Custom, closest_index + 1)
        }
    }

    /// Loest einen explizit gewaehlten Modus auf; nur `Custom` sucht per Distanz.
    pub fn resolve_with_mode(
        mode: InsertPosition,
        candidate: LatLng,
        points: &[PointFeature],
    ) -> InsertResolution {
        match mode {
            InsertPosition::Start => InsertResolution::new(InsertPosition::Start, 0),
            InsertPosition::End => InsertResolution::new(InsertPosition::End, points.len()),
            InsertPosition::Custom => Self::resolve(candidate, points),
        }
    }

    fn closest_index(candidate: LatLng, points: &[PointFeature]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, point) in points.iter().enumerate() {
            let distance = haversine_distance(candidate, point.position());
            // strikt kleiner: der erste Treffer gewinnt bei Gleichstand
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }
}
