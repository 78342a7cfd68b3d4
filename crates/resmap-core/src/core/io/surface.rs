//! Loading of externally computed per-residue surface areas.
//!
//! The table is a CSV with a header row and the columns
//! `chain,residue,absolute,relative`, one row per residue.

use crate::core::models::ids::ResidueKey;
use crate::core::models::surface::{ResidueSurfaceAreas, SurfaceArea};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceTableError {
    #[error("Failed to open surface-area table '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("Invalid surface-area record: {0}")]
    Record(#[from] csv::Error),
    #[error("Duplicate surface-area entry for residue {0}")]
    Duplicate(ResidueKey),
}

#[derive(Debug, Deserialize)]
struct SurfaceRecord {
    chain: String,
    residue: String,
    absolute: f64,
    relative: f64,
}

/// Reads a surface-area table from any reader.
pub fn read_surface_table(reader: impl Read) -> Result<ResidueSurfaceAreas, SurfaceTableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut areas = ResidueSurfaceAreas::new();
    for result in csv_reader.deserialize() {
        let record: SurfaceRecord = result?;
        let key = ResidueKey::new(record.chain, record.residue);
        let area = SurfaceArea {
            absolute: record.absolute,
            relative: record.relative,
        };
        if areas.insert(key.clone(), area).is_some() {
            return Err(SurfaceTableError::Duplicate(key));
        }
    }
    Ok(areas)
}

/// Reads a surface-area table from a CSV file.
pub fn read_surface_csv<P: AsRef<Path>>(path: P) -> Result<ResidueSurfaceAreas, SurfaceTableError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| SurfaceTableError::Open {
        path: path.display().to_string(),
        source: e.into(),
    })?;
    read_surface_table(file)
}
