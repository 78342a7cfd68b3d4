use super::ids::{AtomId, ChainId};
use super::surface::SurfaceArea;
use phf::phf_map;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,
    Glycine,
    Isoleucine,
    Leucine,
    Proline,
    Valine,

    // --- Aromatic ---
    Phenylalanine,
    Tryptophan,
    Tyrosine,

    // --- Polar, Uncharged ---
    Asparagine,
    Cysteine,
    Glutamine,
    Serine,
    Threonine,
    Methionine,

    // --- Charged ---
    Arginine,
    Lysine,
    Histidine,
    AsparticAcid,
    GlutamicAcid,
}

static AMINO_ACIDS_BY_CODE: phf::Map<&'static str, AminoAcid> = phf_map! {
    "ALA" => AminoAcid::Alanine,
    "GLY" => AminoAcid::Glycine,
    "ILE" => AminoAcid::Isoleucine,
    "LEU" => AminoAcid::Leucine,
    "PRO" => AminoAcid::Proline,
    "VAL" => AminoAcid::Valine,
    "PHE" => AminoAcid::Phenylalanine,
    "TRP" => AminoAcid::Tryptophan,
    "TYR" => AminoAcid::Tyrosine,
    "ASN" => AminoAcid::Asparagine,
    "CYS" => AminoAcid::Cysteine,
    "CYX" => AminoAcid::Cysteine,
    "GLN" => AminoAcid::Glutamine,
    "SER" => AminoAcid::Serine,
    "THR" => AminoAcid::Threonine,
    "MET" => AminoAcid::Methionine,
    "ARG" => AminoAcid::Arginine,
    "LYS" => AminoAcid::Lysine,
    "HIS" => AminoAcid::Histidine,
    "HSD" => AminoAcid::Histidine,
    "HSE" => AminoAcid::Histidine,
    "HSP" => AminoAcid::Histidine,
    "ASP" => AminoAcid::AsparticAcid,
    "GLU" => AminoAcid::GlutamicAcid,
};

impl AminoAcid {
    /// Looks up a standard amino acid by its three-letter code.
    ///
    /// Common protonation-state aliases (`HSD`, `HSE`, `HSP`, `CYX`) map onto
    /// their parent residue. The lookup is case-sensitive, matching how residue
    /// names are written in structure files.
    pub fn from_code(code: &str) -> Option<Self> {
        AMINO_ACIDS_BY_CODE.get(code).copied()
    }

    pub fn one_letter_code(&self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Glycine => 'G',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Proline => 'P',
            AminoAcid::Valine => 'V',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Cysteine => 'C',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Methionine => 'M',
            AminoAcid::Arginine => 'R',
            AminoAcid::Lysine => 'K',
            AminoAcid::Histidine => 'H',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub number: String,                     // Residue sequence identifier from source file
    pub name: String,                       // Residue type label (e.g., "ALA", "GLY")
    pub chain_id: ChainId,                  // ID of the parent chain
    pub surface_area: Option<SurfaceArea>,  // Externally attached SASA, if any
    atom_names: Vec<String>,                // Atom names in first-appearance order
    atoms: Vec<AtomId>,                     // Atom IDs, parallel to `atom_names`
    atom_name_map: HashMap<String, AtomId>, // Map from atom name to its stable ID
}

impl Residue {
    pub(crate) fn new(number: &str, name: &str, chain_id: ChainId) -> Self {
        Self {
            number: number.to_string(),
            name: name.to_string(),
            chain_id,
            surface_area: None,
            atom_names: Vec::new(),
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    /// Registers a new atom name. Callers must check for an existing entry first;
    /// a residue never holds two atoms with the same name.
    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        debug_assert!(!self.atom_name_map.contains_key(atom_name));
        self.atom_names.push(atom_name.to_string());
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn atom_names(&self) -> &[String] {
        &self.atom_names
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }

    pub fn amino_acid(&self) -> Option<AminoAcid> {
        AminoAcid::from_code(&self.name)
    }
}
