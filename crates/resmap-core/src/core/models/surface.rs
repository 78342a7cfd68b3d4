use super::ids::ResidueKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Solvent-accessible surface area of one residue, as supplied by an external
/// SASA calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceArea {
    /// Absolute area in square Angstroms.
    pub absolute: f64,
    /// Area relative to the residue's fully exposed reference state.
    pub relative: f64,
}

/// Per-residue surface areas keyed by chain and residue identifier.
pub type ResidueSurfaceAreas = HashMap<ResidueKey, SurfaceArea>;

/// Which component of a [`SurfaceArea`] a correlation compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceMetric {
    #[default]
    Absolute,
    Relative,
}

impl SurfaceMetric {
    pub fn value_of(&self, area: &SurfaceArea) -> f64 {
        match self {
            SurfaceMetric::Absolute => area.absolute,
            SurfaceMetric::Relative => area.relative,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid surface metric '{0}'. Expected 'absolute' or 'relative'.")]
pub struct ParseSurfaceMetricError(pub String);

impl FromStr for SurfaceMetric {
    type Err = ParseSurfaceMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "absolute" | "abs" => Ok(SurfaceMetric::Absolute),
            "relative" | "rel" => Ok(SurfaceMetric::Relative),
            _ => Err(ParseSurfaceMetricError(s.to_string())),
        }
    }
}

impl fmt::Display for SurfaceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceMetric::Absolute => write!(f, "absolute"),
            SurfaceMetric::Relative => write!(f, "relative"),
        }
    }
}

/// Outcome of attaching a surface-area table to a structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    /// Number of residues that received a surface-area value.
    pub residues_enriched: usize,
    /// Chains present in the structure but absent from the table.
    pub chains_without_areas: Vec<String>,
    /// Chains present in the table but absent from the structure.
    pub unknown_chains: Vec<String>,
}

impl EnrichmentReport {
    pub fn is_complete(&self) -> bool {
        self.chains_without_areas.is_empty() && self.unknown_chains.is_empty()
    }
}
