use super::error::EngineError;
use crate::core::models::ids::{ResidueId, ResidueKey};
use crate::core::models::system::Structure;
use crate::core::utils::geometry::{centroid, euclidean_distance, min_pairwise_distance};
use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

/// How the distance between two residues is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMode {
    /// Minimum distance over every inter-atom pair.
    #[default]
    Atom,
    /// Distance between the two residue centroids.
    Centroid,
}

impl FromStr for DistanceMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "atom" => Ok(DistanceMode::Atom),
            "centroid" => Ok(DistanceMode::Centroid),
            _ => Err(EngineError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMode::Atom => write!(f, "atom"),
            DistanceMode::Centroid => write!(f, "centroid"),
        }
    }
}

/// A residue with its coordinates extracted once, ready for repeated pair
/// evaluations.
///
/// Construction fails for a residue without atoms, so every `PreparedResidue`
/// holds at least one position and a centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedResidue {
    pub key: ResidueKey,
    positions: Vec<Point3<f64>>,
    centroid: Point3<f64>,
}

impl PreparedResidue {
    pub fn from_structure(
        structure: &Structure,
        residue_id: ResidueId,
    ) -> Result<Self, EngineError> {
        let key = structure.residue_key(residue_id).ok_or_else(|| {
            EngineError::Internal(format!("Residue {:?} is not part of the structure", residue_id))
        })?;
        let positions = structure.residue_positions(residue_id).ok_or_else(|| {
            EngineError::Internal(format!("Residue {} references a missing atom", key))
        })?;
        let centroid = centroid(&positions).ok_or_else(|| EngineError::EmptyResidue {
            residue: key.clone(),
        })?;
        Ok(Self {
            key,
            positions,
            centroid,
        })
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn centroid(&self) -> &Point3<f64> {
        &self.centroid
    }

    /// Distance to another prepared residue under the given mode.
    #[inline]
    pub fn distance_to(&self, other: &PreparedResidue, mode: DistanceMode) -> f64 {
        match mode {
            // Both position sets are non-empty by construction.
            DistanceMode::Atom => min_pairwise_distance(&self.positions, &other.positions)
                .unwrap_or(f64::INFINITY),
            DistanceMode::Centroid => euclidean_distance(&self.centroid, &other.centroid),
        }
    }
}

/// Centroid of a residue's atoms.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResidue`] if the residue has no atoms.
pub fn residue_centroid(
    structure: &Structure,
    residue_id: ResidueId,
) -> Result<Point3<f64>, EngineError> {
    PreparedResidue::from_structure(structure, residue_id).map(|prepared| prepared.centroid)
}

/// Distance between two residues, possibly from different structures.
pub fn residue_distance(
    mode: DistanceMode,
    (structure_a, residue_a): (&Structure, ResidueId),
    (structure_b, residue_b): (&Structure, ResidueId),
) -> Result<f64, EngineError> {
    let a = PreparedResidue::from_structure(structure_a, residue_a)?;
    let b = PreparedResidue::from_structure(structure_b, residue_b)?;
    Ok(a.distance_to(&b, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;

    const TOLERANCE: f64 = 1e-12;

    fn add_residue(
        structure: &mut Structure,
        chain: &str,
        number: &str,
        positions: &[[f64; 3]],
    ) -> ResidueId {
        let chain_id = structure.add_chain(chain);
        let residue_id = structure.add_residue(chain_id, number, "GLY").unwrap();
        for (i, p) in positions.iter().enumerate() {
            let name = format!("X{}", i);
            let atom = Atom::new(&i.to_string(), &name, residue_id, Point3::new(p[0], p[1], p[2]));
            structure.upsert_atom(residue_id, atom).unwrap();
        }
        residue_id
    }

    #[test]
    fn mode_parses_known_names_and_rejects_others() {
        assert_eq!("atom".parse::<DistanceMode>().unwrap(), DistanceMode::Atom);
        assert_eq!("Centroid".parse::<DistanceMode>().unwrap(), DistanceMode::Centroid);
        assert!(matches!(
            "closest".parse::<DistanceMode>(),
            Err(EngineError::InvalidMode(mode)) if mode == "closest"
        ));
    }

    #[test]
    fn centroid_of_two_atoms_is_their_midpoint() {
        let mut structure = Structure::new();
        let id = add_residue(&mut structure, "A", "1", &[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        assert_eq!(
            residue_centroid(&structure, id).unwrap(),
            Point3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn centroid_of_empty_residue_fails() {
        let mut structure = Structure::new();
        let id = add_residue(&mut structure, "A", "1", &[]);
        assert!(matches!(
            residue_centroid(&structure, id),
            Err(EngineError::EmptyResidue { residue }) if residue == ResidueKey::new("A", "1")
        ));
    }

    #[test]
    fn atom_mode_is_never_larger_than_any_atom_pair() {
        let mut structure = Structure::new();
        let a = add_residue(
            &mut structure,
            "A",
            "1",
            &[[0.0, 0.0, 0.0], [1.0, 2.0, 0.5], [-1.0, 0.0, 3.0]],
        );
        let b = add_residue(&mut structure, "B", "1", &[[4.0, 0.0, 0.0], [2.0, 2.0, 2.0]]);

        let min = residue_distance(DistanceMode::Atom, (&structure, a), (&structure, b)).unwrap();
        let pa = structure.residue_positions(a).unwrap();
        let pb = structure.residue_positions(b).unwrap();
        for p in &pa {
            for q in &pb {
                assert!(min <= euclidean_distance(p, q) + TOLERANCE);
            }
        }
    }

    #[test]
    fn centroid_mode_measures_between_centroids() {
        let mut structure = Structure::new();
        let a = add_residue(&mut structure, "A", "1", &[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        let b = add_residue(&mut structure, "A", "2", &[[1.0, 3.0, 0.0], [1.0, 5.0, 0.0]]);

        let d = residue_distance(DistanceMode::Centroid, (&structure, a), (&structure, b)).unwrap();
        assert!((d - 4.0).abs() < TOLERANCE);

        let atom = residue_distance(DistanceMode::Atom, (&structure, a), (&structure, b)).unwrap();
        assert!((atom - 10.0_f64.sqrt()).abs() < TOLERANCE);
    }

    #[test]
    fn residues_from_different_structures_can_be_compared() {
        let mut first = Structure::new();
        let mut second = Structure::new();
        let a = add_residue(&mut first, "A", "1", &[[0.0, 0.0, 0.0]]);
        let b = add_residue(&mut second, "A", "1", &[[0.0, 0.0, 6.0]]);

        let d = residue_distance(DistanceMode::Atom, (&first, a), (&second, b)).unwrap();
        assert!((d - 6.0).abs() < TOLERANCE);
    }
}
