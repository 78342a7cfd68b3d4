use super::error::EngineError;
use crate::core::models::ids::{ResidueId, ResidueKey};
use crate::core::models::surface::SurfaceArea;
use crate::core::models::system::Structure;
use std::collections::HashSet;

/// Which residues of a structure take part in an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResidueSelection {
    /// Every residue, in file order.
    #[default]
    All,
    /// Every residue of the named chains, in the order the chains are listed.
    Chains(Vec<String>),
    /// Specific residues, in the order given.
    List(Vec<ResidueKey>),
}

/// Resolves a selection into residue IDs of `structure`.
///
/// Duplicates are dropped, keeping the first occurrence, so the result is a
/// deterministic ordered set.
///
/// # Errors
///
/// Returns [`EngineError::UnknownChain`] or [`EngineError::ResidueNotFound`] if a
/// selection names something the structure does not contain.
pub fn resolve_selection(
    structure: &Structure,
    selection: &ResidueSelection,
) -> Result<Vec<ResidueId>, EngineError> {
    let candidates = match selection {
        ResidueSelection::All => structure.residues_in_order(),
        ResidueSelection::Chains(chains) => {
            let mut ids = Vec::new();
            for chain in chains {
                let chain_id = structure
                    .find_chain_by_id(chain)
                    .ok_or_else(|| EngineError::UnknownChain {
                        chain: chain.clone(),
                    })?;
                let entry = structure.chain(chain_id).ok_or_else(|| {
                    EngineError::Internal(format!("Chain '{}' has no entry", chain))
                })?;
                ids.extend_from_slice(entry.residues());
            }
            ids
        }
        ResidueSelection::List(keys) => keys
            .iter()
            .map(|key| {
                let chain_id = structure.find_chain_by_id(&key.chain).ok_or_else(|| {
                    EngineError::UnknownChain {
                        chain: key.chain.clone(),
                    }
                })?;
                structure
                    .find_residue(chain_id, &key.residue)
                    .ok_or_else(|| EngineError::ResidueNotFound { key: key.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    let mut seen = HashSet::with_capacity(candidates.len());
    Ok(candidates
        .into_iter()
        .filter(|id| seen.insert(*id))
        .collect())
}

/// An ordered set of residues bound to the structure they belong to.
///
/// Two entries from different sets denote the same residue instance only if
/// both sets borrow the same structure and the residue IDs are equal.
#[derive(Debug, Clone, Copy)]
pub struct ResidueSet<'a> {
    structure: &'a Structure,
    residues: &'a [ResidueId],
}

impl<'a> ResidueSet<'a> {
    pub fn new(structure: &'a Structure, residues: &'a [ResidueId]) -> Self {
        Self {
            structure,
            residues,
        }
    }

    pub fn structure(&self) -> &'a Structure {
        self.structure
    }

    pub fn residues(&self) -> &'a [ResidueId] {
        self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Whether both sets are drawn from the same structure instance.
    pub fn shares_structure_with(&self, other: &ResidueSet<'_>) -> bool {
        std::ptr::eq(self.structure, other.structure)
    }

    /// Surface areas attached to the residues of this set, skipping residues
    /// without one.
    pub fn surface_areas(&self) -> impl Iterator<Item = (ResidueId, &'a SurfaceArea)> + 'a {
        let structure = self.structure;
        self.residues.iter().filter_map(move |&id| {
            structure
                .residue(id)
                .and_then(|residue| residue.surface_area.as_ref())
                .map(|area| (id, area))
        })
    }
}
