//! Builder für Render-Szenen aus der EditingSession.

use crate::app::engine::UNNAMED_POINT;
use crate::app::EditingSession;
use crate::core::{PointFeature, RouteCollection};
use crate::export::MISSING;
use crate::shared::{EditorOptions, LineShape, MarkerShape, RenderLayer, RenderScene};
use glam::DVec2;

/// Baut eine RenderScene aus der aktuellen Session.
///
/// Hintergrund zuerst, aktive Route darueber.
pub fn build(session: &EditingSession) -> RenderScene {
    let options = &session.options;
    let store = session.engine.store();

    let background = store
        .background()
        .map(|collection| background_layer(collection, options));
    let primary = if session.has_route() || !store.is_empty() {
        primary_layer(session)
    } else {
        RenderLayer::default()
    };

    let bounds = compute_bounds(background.iter().chain(std::iter::once(&primary)));

    RenderScene {
        background,
        primary,
        bounds,
    }
}

fn background_layer(collection: &RouteCollection, options: &EditorOptions) -> RenderLayer {
    let mut lines: Vec<LineShape> = collection
        .source_lines()
        .iter()
        .filter(|line| line.len() > 1)
        .map(|line| LineShape {
            coordinates: line.clone(),
            color: options.background_line_color,
            width: options.background_line_width,
        })
        .collect();
    if lines.is_empty() && collection.len() > 1 {
        lines.push(LineShape {
            coordinates: collection.current_line(),
            color: options.background_line_color,
            width: options.background_line_width,
        });
    }

    let markers = collection
        .points()
        .iter()
        .map(|point| MarkerShape {
            position: point.coordinates,
            color: options.background_point_color,
            radius: options.background_point_radius,
            point_index: None,
            kind: point.kind.clone(),
            selected: false,
            popup: popup_text(point),
        })
        .collect();

    RenderLayer { lines, markers }
}

fn primary_layer(session: &EditingSession) -> RenderLayer {
    let options = &session.options;
    let engine = &session.engine;
    let active = engine.store().active();

    let line = active.current_line();
    let lines = if line.len() > 1 {
        vec![LineShape {
            coordinates: line,
            color: options.route_color(session.version),
            width: options.route_line_width,
        }]
    } else {
        Vec::new()
    };

    let markers = active
        .points()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let selected = engine.selection().contains(index);
            MarkerShape {
                position: point.coordinates,
                color: if selected {
                    options.selected_point_color
                } else {
                    options.point_color(&point.kind)
                },
                radius: options.marker_radius,
                point_index: Some(index),
                kind: point.kind.clone(),
                selected,
                popup: popup_text(point),
            }
        })
        .collect();

    RenderLayer { lines, markers }
}

/// Popup-Text eines Markers: Reihenfolge, Name, Typ, Hoehe.
fn popup_text(point: &PointFeature) -> String {
    let elevation = point
        .elevation
        .map(|e| format!("{e} m"))
        .unwrap_or_else(|| MISSING.to_string());
    format!(
        "順序: {}\n名稱: {}\n類型: {}\n海拔: {}",
        point.order,
        point.name.as_deref().unwrap_or(UNNAMED_POINT),
        point.kind.label().unwrap_or(MISSING),
        elevation
    )
}

fn compute_bounds<'a>(layers: impl Iterator<Item = &'a RenderLayer>) -> Option<(DVec2, DVec2)> {
    let mut bounds: Option<(DVec2, DVec2)> = None;
    for layer in layers {
        let coordinates = layer
            .lines
            .iter()
            .flat_map(|line| line.coordinates.iter())
            .chain(layer.markers.iter().map(|marker| &marker.position));
        for &c in coordinates {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(c), max.max(c)),
                None => (c, c),
            });
        }
    }
    bounds
}
