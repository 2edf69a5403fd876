//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod export;
pub mod gpx;
pub mod route_loading;
pub mod selection;
