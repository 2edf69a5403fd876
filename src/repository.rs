//! Aufloesung von Routennamen zu Quelldokumenten.

use crate::core::{EditError, RouteVersion};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Dateiname des Routendokuments in jedem Routenordner.
pub const ROUTE_FILE_NAME: &str = "route.geojson";

/// Prueft, dass ein Routenname genau eine Pfadkomponente ergibt.
///
/// Routennamen werden zu Ordner- und Dateinamen; Trenner, `..` und NUL
/// wuerden aus `data_root` bzw. dem Export-Ordner herausfuehren.
pub fn validate_route_name(route_name: &str) -> Result<(), EditError> {
    if route_name.trim().is_empty() {
        return Err(EditError::validation("Routenname ist leer"));
    }
    if route_name.contains(['/', '\\', '\0']) || route_name.contains("..") {
        return Err(EditError::validation(format!(
            "Ungueltiger Routenname: {}",
            route_name
        )));
    }
    Ok(())
}

/// Quelle fuer Routendokumente.
pub trait RouteRepository {
    /// Alle bekannten Routennamen, sortiert.
    fn list_routes(&self) -> Result<Vec<String>, EditError>;

    /// Liefert das Rohdokument; `NotFound` wenn die Variante fehlt.
    fn fetch(&self, route_name: &str, version: RouteVersion) -> Result<String, EditError>;

    /// Gibt `true` zurueck, wenn die Variante existiert.
    fn exists(&self, route_name: &str, version: RouteVersion) -> bool {
        self.fetch(route_name, version).is_ok()
    }
}

/// Dateisystem-Layout `{data_root}/route_{a|b}/{name}/route.geojson`.
#[derive(Debug, Clone)]
pub struct FsRouteRepository {
    data_root: PathBuf,
}

impl FsRouteRepository {
    /// Erstellt ein Repository ueber `data_root`.
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    /// Datenwurzel.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Pfad des Routendokuments (unabhaengig davon, ob es existiert).
    pub fn route_path(&self, route_name: &str, version: RouteVersion) -> Result<PathBuf, EditError> {
        validate_route_name(route_name)?;
        Ok(self
            .data_root
            .join(version.dir_name())
            .join(route_name)
            .join(ROUTE_FILE_NAME))
    }
}

impl RouteRepository for FsRouteRepository {
    fn list_routes(&self) -> Result<Vec<String>, EditError> {
        let dir = self.data_root.join(RouteVersion::A.dir_name());
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Routenordner {} fehlt", dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.path().join(ROUTE_FILE_NAME).is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn fetch(&self, route_name: &str, version: RouteVersion) -> Result<String, EditError> {
        let path = self.route_path(route_name, version)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(EditError::NotFound(
                format!("{} ({})", route_name, version.dir_name()),
            )),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, route_name: &str, version: RouteVersion) -> bool {
        self.route_path(route_name, version)
            .is_ok_and(|path| path.is_file())
    }
}

/// Repository im Speicher (Tests, Einbettung).
#[derive(Debug, Clone, Default)]
pub struct InMemoryRouteRepository {
    documents: BTreeMap<(String, RouteVersion), String>,
}

impl InMemoryRouteRepository {
    /// Erstellt ein leeres Repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hinterlegt ein Dokument.
    pub fn insert(
        &mut self,
        route_name: impl Into<String>,
        version: RouteVersion,
        document: impl Into<String>,
    ) {
        self.documents
            .insert((route_name.into(), version), document.into());
    }

    /// Builder-Variante von [`insert`](Self::insert).
    pub fn with_route(
        mut self,
        route_name: impl Into<String>,
        version: RouteVersion,
        document: impl Into<String>,
    ) -> Self {
        self.insert(route_name, version, document);
        self
    }
}

impl RouteRepository for InMemoryRouteRepository {
    fn list_routes(&self) -> Result<Vec<String>, EditError> {
        let mut names: Vec<String> = self
            .documents
            .keys()
            .filter(|(_, version)| *version == RouteVersion::A)
            .map(|(name, _)| name.clone())
            .collect();
        names.dedup();
        Ok(names)
    }

    fn fetch(&self, route_name: &str, version: RouteVersion) -> Result<String, EditError> {
        validate_route_name(route_name)?;
        self.documents
            .get(&(route_name.to_string(), version))
            .cloned()
            .ok_or_else(|| {
                EditError::NotFound(format!("{} ({})", route_name, version.dir_name()))
            })
    }
}
