use serde::{Deserialize, Serialize};

/// Position of a declaration within its manifest, as 1-based physical lines.
///
/// The pip format performs no logical-line joining, so every record produced
/// by it has `start_line == end_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start_line: usize,
    pub end_line: usize,
}

impl Location {
    /// Location spanning a single physical line.
    pub fn line(n: usize) -> Self {
        Self {
            start_line: n,
            end_line: n,
        }
    }
}

/// A directly declared library extracted from a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    pub version: String,
    pub location: Location,
}

/// A dependency edge between declared packages.
///
/// Kept for API symmetry with other manifest parsers in the inventory tool.
/// The pip requirements format carries no relationship information, so its
/// parser never produces these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub id: String,
    pub depends_on: Vec<String>,
}

/// Result of parsing one manifest: direct declarations in order of first
/// appearance (duplicates by name are preserved) plus any dependency edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestReport {
    pub libraries: Vec<Library>,
    pub dependencies: Vec<Dependency>,
}
