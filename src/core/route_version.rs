//! Die zwei parallelen Varianten ("A"/"B") einer benannten Route.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Routen-Variante.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RouteVersion {
    /// Variante A (`route_a`)
    #[default]
    A,
    /// Variante B (`route_b`)
    B,
}

impl RouteVersion {
    /// Die jeweils andere Variante (Hintergrund-Route).
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Verzeichnisname im Datenordner (`route_a`/`route_b`).
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::A => "route_a",
            Self::B => "route_b",
        }
    }

    /// Kurzes Suffix fuer Export-Dateinamen (`a`/`b`).
    pub fn suffix(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }

    /// Parst `a`, `b`, `route_a`, `route_b` (gross/klein egal).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "a" | "route_a" => Some(Self::A),
            "b" | "route_b" => Some(Self::B),
            _ => None,
        }
    }
}

impl fmt::Display for RouteVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_version_flips() {
        assert_eq!(RouteVersion::A.other(), RouteVersion::B);
        assert_eq!(RouteVersion::B.other(), RouteVersion::A);
    }

    #[test]
    fn parse_accepts_short_and_dir_names() {
        assert_eq!(RouteVersion::parse("B"), Some(RouteVersion::B));
        assert_eq!(RouteVersion::parse("route_a"), Some(RouteVersion::A));
        assert_eq!(RouteVersion::parse("c"), None);
    }
}
