//! Geteilte Typen fuer layer-uebergreifende Vertraege.
//!
//! Enthaelt Typen, die zwischen `app` und einem Renderer bzw. Frontend geteilt
//! werden, um direkte Abhaengigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{LineShape, MarkerShape, RenderLayer, RenderScene};
