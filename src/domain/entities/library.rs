//! Library entity
//!
//! A dependency artifact handed to the layer selectors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Maven-style `group:artifact:version` coordinates. Any part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LibraryCoordinates {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl LibraryCoordinates {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
        }
    }

    /// `group:artifact:version`, with missing parts left empty.
    pub fn to_standard_notation(&self) -> String {
        format!(
            "{}:{}:{}",
            self.group_id.as_deref().unwrap_or_default(),
            self.artifact_id.as_deref().unwrap_or_default(),
            self.version.as_deref().unwrap_or_default()
        )
    }
}

impl FromStr for LibraryCoordinates {
    type Err = std::convert::Infallible;

    /// Parses `group:artifact:version`. Empty or absent parts become `None`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':').map(|p| {
            let p = p.trim();
            (!p.is_empty()).then(|| p.to_string())
        });
        Ok(Self {
            group_id: parts.next().flatten(),
            artifact_id: parts.next().flatten(),
            version: parts.next().flatten(),
        })
    }
}

impl fmt::Display for LibraryCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_standard_notation())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Library {
    name: String,
    coordinates: Option<LibraryCoordinates>,
    local: bool,
}

impl Library {
    pub fn new(name: impl Into<String>, coordinates: Option<LibraryCoordinates>) -> Self {
        Self {
            name: name.into(),
            coordinates,
            local: false,
        }
    }

    /// Build a library from its coordinates, deriving the usual `artifact-version.jar` name.
    pub fn from_coordinates(coordinates: LibraryCoordinates) -> Self {
        let name = match (&coordinates.artifact_id, &coordinates.version) {
            (Some(a), Some(v)) => format!("{a}-{v}.jar"),
            (Some(a), None) => format!("{a}.jar"),
            _ => coordinates.to_standard_notation(),
        };
        Self::new(name, Some(coordinates))
    }

    /// Mark this library as coming from a module of the same build.
    pub fn local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Option<&LibraryCoordinates> {
        self.coordinates.as_ref()
    }

    pub fn is_local(&self) -> bool {
        self.local
    }

    /// Coordinates in standard notation; `::` when unknown.
    pub fn standard_notation(&self) -> String {
        self.coordinates
            .as_ref()
            .map(LibraryCoordinates::to_standard_notation)
            .unwrap_or_else(|| "::".to_string())
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            Some(c) => write!(f, "{c}"),
            None => f.write_str(&self.name),
        }
    }
}
