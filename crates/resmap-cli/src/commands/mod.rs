pub mod contacts;
pub mod info;
pub mod sweep;

use crate::error::{CliError, Result};
use resmap::core::io::pdb::PdbFile;
use resmap::core::io::traits::StructureFile;
use resmap::core::models::system::Structure;
use std::path::Path;
use tracing::info;

pub(crate) fn load_structure(path: &Path) -> Result<Structure> {
    info!("Loading structure from {:?}", path);
    let structure = PdbFile::read_from_path(path).map_err(|e| CliError::parsing(path, e))?;
    info!(
        chains = structure.chain_count(),
        residues = structure.residue_count(),
        atoms = structure.atom_count(),
        "Structure loaded."
    );
    Ok(structure)
}

/// Loads the row structure and, if given, the partner structure.
///
/// Without a partner the caller compares the row structure with itself.
pub(crate) fn load_structures(
    input: &Path,
    partner: Option<&Path>,
) -> Result<(Structure, Option<Structure>)> {
    let structure = load_structure(input)?;
    let partner = partner.map(load_structure).transpose()?;
    Ok((structure, partner))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    pub(crate) const COMPLEX: &str = "\
ATOM      1  N   ALA A   1       0.000   0.000   0.000  1.00 10.00
ATOM      2  CA  ALA A   1       1.400   0.000   0.000  1.00 12.00
ATOM      3  CA  GLY A   2       5.000   0.000   0.000  1.00 11.00
ATOM      4  CA  SER B   1       1.400   3.000   0.000  1.00 20.00
ATOM      5  CA  THR B   2      12.000   0.000   0.000  1.00 21.00
";

    pub(crate) fn write_structure(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("complex.pdb");
        std::fs::write(&path, COMPLEX).unwrap();
        path
    }

    #[test]
    fn loads_a_structure_and_its_partner() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_structure(&dir);

        let (structure, partner) = load_structures(&path, Some(&path)).unwrap();
        assert_eq!(structure.residue_count(), 4);
        assert_eq!(partner.map(|p| p.atom_count()), Some(5));
    }

    #[test]
    fn missing_file_is_a_parsing_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.pdb");
        match load_structure(&missing) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected parsing error, got {:?}", other.map(|_| ())),
        }
    }
}
