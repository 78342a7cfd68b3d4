use super::ids::ResidueId;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: String,                                // Chain identifier (e.g., "A", "B")
    pub(crate) residues: Vec<ResidueId>,           // Residue IDs in first-appearance order
    pub(crate) residue_map: HashMap<String, ResidueId>, // Residue number to its stable ID
}

impl Chain {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            residues: Vec::new(),
            residue_map: HashMap::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn find_residue(&self, number: &str) -> Option<ResidueId> {
        self.residue_map.get(number).copied()
    }
}
