//! Render-Szene als expliziter Uebergabevertrag zwischen App und Karten-Widget.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein beliebiger Renderer sie konsumiert.

use crate::core::PointKind;
use glam::DVec2;

/// Eine Polyline in Laenge/Breite.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub coordinates: Vec<DVec2>,
    pub color: [f32; 4],
    pub width: f32,
}

/// Ein Kreis-Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerShape {
    pub position: DVec2,
    pub color: [f32; 4],
    pub radius: f32,
    /// Index in der aktiven Punktfolge (`None` = Hintergrund, nicht anklickbar)
    pub point_index: Option<usize>,
    pub kind: PointKind,
    pub selected: bool,
    /// Popup-Text (leer bei Hintergrund-Punkten)
    pub popup: String,
}

/// Eine Zeichenebene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderLayer {
    pub lines: Vec<LineShape>,
    pub markers: Vec<MarkerShape>,
}

impl RenderLayer {
    /// Gibt `true` zurueck, wenn die Ebene nichts zeichnet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.markers.is_empty()
    }
}

/// Read-only Daten fuer einen Render-Frame.
///
/// Ebenen werden in `layers()`-Reihenfolge gezeichnet: Hintergrund zuerst.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Vergleichsroute (grau, nicht interaktiv)
    pub background: Option<RenderLayer>,
    /// Aktive Route
    pub primary: RenderLayer,
    /// Bounding-Box aller Koordinaten (min, max), falls vorhanden
    pub bounds: Option<(DVec2, DVec2)>,
}

impl RenderScene {
    /// Ebenen in Zeichenreihenfolge.
    pub fn layers(&self) -> impl Iterator<Item = &RenderLayer> {
        self.background.iter().chain(std::iter::once(&self.primary))
    }

    /// Gibt zurueck, ob eine Route zum Zeichnen vorhanden ist.
    pub fn has_route(&self) -> bool {
        !self.primary.is_empty()
    }
}
