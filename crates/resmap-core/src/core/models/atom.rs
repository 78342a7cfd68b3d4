use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom read from a structure file.
///
/// Atoms are immutable once parsed, with one exception: the surface-area value,
/// which an external enrichment pass may attach afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom serial exactly as written in the source file.
    pub serial: String,
    /// The name of the atom (e.g., "CA", "N", "OG1").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Auxiliary per-atom scalar, usually the temperature factor.
    pub b_factor: Option<f64>,
    /// Solvent-accessible surface area attached after parsing, in square Angstroms.
    pub surface_area: Option<f64>,
}

impl Atom {
    /// Creates a new `Atom` without any optional properties.
    ///
    /// # Arguments
    ///
    /// * `serial` - The serial identifier from the source file.
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(serial: &str, name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            serial: serial.to_string(),
            name: name.to_string(),
            residue_id,
            position,
            b_factor: None,
            surface_area: None,
        }
    }

    pub fn with_b_factor(mut self, b_factor: Option<f64>) -> Self {
        self.b_factor = b_factor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_no_optional_properties() {
        let residue_id = ResidueId::default();
        let atom = Atom::new("7", "CA", residue_id, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.serial, "7");
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.residue_id, residue_id);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.b_factor, None);
        assert_eq!(atom.surface_area, None);
    }

    #[test]
    fn with_b_factor_sets_the_auxiliary_scalar() {
        let atom = Atom::new("1", "N", ResidueId::default(), Point3::origin())
            .with_b_factor(Some(12.5));
        assert_eq!(atom.b_factor, Some(12.5));
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let mut atom1 = Atom::new("3", "O", ResidueId::default(), Point3::new(0.0, 1.0, 0.0));
        atom1.surface_area = Some(4.2);
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
