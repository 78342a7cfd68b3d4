use super::atom::Atom;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId, ResidueKey};
use super::residue::Residue;
use super::surface::{EnrichmentReport, ResidueSurfaceAreas};
use nalgebra::Point3;
use slotmap::SlotMap;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// Represents a parsed structure: chains, residues and atoms.
///
/// This is the root of the structure model. Chains are kept in the order they
/// were first seen in the source file, as are residues within a chain and atoms
/// within a residue, so every iteration over a `Structure` is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for efficient ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Chain IDs in first-appearance order.
    chain_order: Vec<ChainId>,
    /// Lookup map for finding chains by their identifier.
    chain_id_map: HashMap<String, ChainId>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns an iterator over all atoms in the structure.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Retrieves an immutable reference to a residue by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Residue)` if the residue exists, otherwise `None`.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Returns an iterator over all residues, in no particular order.
    ///
    /// Use [`Structure::residues_in_order`] when file order matters.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Chain IDs in first-appearance order.
    pub fn chain_order(&self) -> &[ChainId] {
        &self.chain_order
    }

    /// Returns an iterator over chains in first-appearance order.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chain_order
            .iter()
            .filter_map(|&id| self.chains.get(id).map(|chain| (id, chain)))
    }

    /// Finds a chain ID by its identifier.
    pub fn find_chain_by_id(&self, id: &str) -> Option<ChainId> {
        self.chain_id_map.get(id).copied()
    }

    /// Finds a residue ID by its chain ID and residue number.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if the residue exists, otherwise `None`.
    pub fn find_residue(&self, chain_id: ChainId, residue_number: &str) -> Option<ResidueId> {
        self.chains.get(chain_id)?.find_residue(residue_number)
    }

    /// Finds a residue by its file-level chain and residue labels.
    pub fn find_residue_by_key(&self, key: &ResidueKey) -> Option<ResidueId> {
        let chain_id = self.find_chain_by_id(&key.chain)?;
        self.find_residue(chain_id, &key.residue)
    }

    /// Builds the file-level key of a residue.
    pub fn residue_key(&self, id: ResidueId) -> Option<ResidueKey> {
        let residue = self.residues.get(id)?;
        let chain = self.chains.get(residue.chain_id)?;
        Some(ResidueKey::new(chain.id.as_str(), residue.number.as_str()))
    }

    /// Adds a new chain to the structure or returns the existing one.
    ///
    /// This method is idempotent; a chain identifier is appended to the chain
    /// order only the first time it is seen.
    pub fn add_chain(&mut self, id: &str) -> ChainId {
        if let Some(&existing) = self.chain_id_map.get(id) {
            return existing;
        }
        let chain_id = self.chains.insert(Chain::new(id));
        self.chain_id_map.insert(id.to_string(), chain_id);
        self.chain_order.push(chain_id);
        chain_id
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// The residue type is recorded from the first call only; later calls with
    /// the same residue number leave it untouched.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (if the chain doesn't exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: &str,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        if let Some(&existing) = chain.residue_map.get(residue_number) {
            return Some(existing);
        }

        let residue_id = self
            .residues
            .insert(Residue::new(residue_number, name, chain_id));
        chain
            .residue_map
            .insert(residue_number.to_string(), residue_id);
        chain.residues.push(residue_id);
        Some(residue_id)
    }

    /// Adds an atom to a residue, or updates the coordinates of the atom with the
    /// same name if the residue already has one.
    ///
    /// Repeated atom names (alternate locations) follow a last-write-wins policy for
    /// the position; the serial and auxiliary scalar of the first occurrence are kept
    /// and the atom-name list is never duplicated.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` of the inserted or updated atom, otherwise `None`
    /// (if the residue doesn't exist).
    pub fn upsert_atom(&mut self, residue_id: ResidueId, atom: Atom) -> Option<AtomId> {
        let residue = self.residues.get_mut(residue_id)?;

        if let Some(existing_id) = residue.get_atom_id_by_name(&atom.name) {
            let existing = self.atoms.get_mut(existing_id)?;
            existing.position = atom.position;
            return Some(existing_id);
        }

        let name = atom.name.clone();
        let atom_id = self.atoms.insert(Atom { residue_id, ..atom });
        residue.add_atom(&name, atom_id);
        Some(atom_id)
    }

    /// Collects the positions of a residue's atoms in atom-list order.
    pub fn residue_positions(&self, residue_id: ResidueId) -> Option<Vec<Point3<f64>>> {
        let residue = self.residues.get(residue_id)?;
        residue
            .atoms()
            .iter()
            .map(|&atom_id| self.atoms.get(atom_id).map(|atom| atom.position))
            .collect()
    }

    /// Residue IDs in file order: chains by first appearance, then residues by
    /// first appearance within each chain.
    pub fn residues_in_order(&self) -> Vec<ResidueId> {
        self.chains_iter()
            .flat_map(|(_, chain)| chain.residues().iter().copied())
            .collect()
    }

    pub fn chain_count(&self) -> usize {
        self.chain_order.len()
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Counts residues whose type label equals `name` (e.g., "LYS").
    pub fn count_residues_named(&self, name: &str) -> usize {
        self.residues
            .values()
            .filter(|residue| residue.name == name)
            .count()
    }

    /// Counts residues whose type label equals `name`, per chain in chain order.
    ///
    /// Every chain appears in the result, including those with a count of zero.
    pub fn count_residues_named_per_chain(&self, name: &str) -> Vec<(String, usize)> {
        self.chains_iter()
            .map(|(_, chain)| {
                let count = chain
                    .residues()
                    .iter()
                    .filter_map(|&id| self.residues.get(id))
                    .filter(|residue| residue.name == name)
                    .count();
                (chain.id.clone(), count)
            })
            .collect()
    }

    /// Attaches externally computed per-residue surface areas.
    ///
    /// This is the only post-construction mutation a structure supports. Residues
    /// missing from the table are left untouched. Chains that appear on only one
    /// side are reported and logged as a warning, but are not an error.
    pub fn attach_surface_areas(&mut self, areas: &ResidueSurfaceAreas) -> EnrichmentReport {
        let table_chains: BTreeSet<&str> = areas.keys().map(|key| key.chain.as_str()).collect();

        let mut report = EnrichmentReport::default();
        for &chain_id in &self.chain_order {
            let Some(chain) = self.chains.get(chain_id) else {
                continue;
            };
            if !table_chains.contains(chain.id.as_str()) {
                report.chains_without_areas.push(chain.id.clone());
                continue;
            }
            for &residue_id in chain.residues() {
                let Some(residue) = self.residues.get_mut(residue_id) else {
                    continue;
                };
                let key = ResidueKey::new(chain.id.as_str(), residue.number.as_str());
                if let Some(area) = areas.get(&key) {
                    residue.surface_area = Some(*area);
                    report.residues_enriched += 1;
                }
            }
        }
        report.unknown_chains = table_chains
            .into_iter()
            .filter(|chain| !self.chain_id_map.contains_key(*chain))
            .map(str::to_string)
            .collect();

        if !report.is_complete() {
            warn!(
                without_areas = ?report.chains_without_areas,
                unknown = ?report.unknown_chains,
                "Not all chains have surface areas."
            );
        }
        report
    }

    /// Attaches a surface-area value to a single atom.
    ///
    /// # Return
    ///
    /// Returns `Some(())` if successful, otherwise `None` (if the atom doesn't exist).
    pub fn set_atom_surface_area(&mut self, atom_id: AtomId, value: f64) -> Option<()> {
        self.atoms.get_mut(atom_id)?.surface_area = Some(value);
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::surface::SurfaceArea;

    struct TestRefs {
        chain_a: ChainId,
        ala: ResidueId,
        ala_ca: AtomId,
        lys: ResidueId,
    }

    fn create_standard_test_structure() -> (Structure, TestRefs) {
        let mut structure = Structure::new();
        let chain_a = structure.add_chain("A");
        let chain_b = structure.add_chain("B");

        let ala = structure.add_residue(chain_a, "1", "ALA").unwrap();
        let ala_ca = structure
            .upsert_atom(ala, Atom::new("1", "CA", ala, Point3::new(0.0, 0.0, 0.0)))
            .unwrap();
        structure
            .upsert_atom(ala, Atom::new("2", "CB", ala, Point3::new(2.0, 0.0, 0.0)))
            .unwrap();

        let lys = structure.add_residue(chain_b, "5", "LYS").unwrap();
        structure
            .upsert_atom(lys, Atom::new("3", "NZ", lys, Point3::new(5.0, 0.0, 0.0)))
            .unwrap();
        let lys2 = structure.add_residue(chain_a, "2", "LYS").unwrap();
        structure
            .upsert_atom(lys2, Atom::new("4", "CA", lys2, Point3::new(3.8, 0.0, 0.0)))
            .unwrap();

        (
            structure,
            TestRefs {
                chain_a,
                ala,
                ala_ca,
                lys,
            },
        )
    }

    mod construction {
        use super::*;

        #[test]
        fn add_chain_is_idempotent_and_keeps_first_seen_order() {
            let mut structure = Structure::new();
            let b = structure.add_chain("B");
            let a = structure.add_chain("A");
            assert_eq!(structure.add_chain("B"), b);
            assert_eq!(structure.chain_order(), &[b, a]);
            assert_eq!(structure.chain_count(), 2);
        }

        #[test]
        fn add_residue_is_idempotent_and_keeps_first_type() {
            let mut structure = Structure::new();
            let chain = structure.add_chain("A");
            let first = structure.add_residue(chain, "10", "GLY").unwrap();
            let again = structure.add_residue(chain, "10", "ALA").unwrap();
            assert_eq!(first, again);
            assert_eq!(structure.residue(first).unwrap().name, "GLY");
            assert_eq!(structure.chain(chain).unwrap().residues(), &[first]);
        }

        #[test]
        fn add_residue_fails_for_missing_chain() {
            let mut structure = Structure::new();
            assert!(
                structure
                    .add_residue(ChainId::default(), "1", "ALA")
                    .is_none()
            );
        }

        #[test]
        fn upsert_atom_overwrites_position_for_repeated_name() {
            let (mut structure, refs) = create_standard_test_structure();
            let again = structure
                .upsert_atom(
                    refs.ala,
                    Atom::new("99", "CA", refs.ala, Point3::new(9.0, 9.0, 9.0))
                        .with_b_factor(Some(50.0)),
                )
                .unwrap();

            assert_eq!(again, refs.ala_ca);
            let atom = structure.atom(refs.ala_ca).unwrap();
            assert_eq!(atom.position, Point3::new(9.0, 9.0, 9.0));
            assert_eq!(atom.serial, "1");
            assert_eq!(atom.b_factor, None);

            let residue = structure.residue(refs.ala).unwrap();
            assert_eq!(residue.atom_names(), &["CA".to_string(), "CB".to_string()]);
            assert_eq!(residue.atom_count(), 2);
        }

        #[test]
        fn upsert_atom_rewrites_residue_id_of_inserted_atom() {
            let (mut structure, refs) = create_standard_test_structure();
            let atom_id = structure
                .upsert_atom(
                    refs.lys,
                    Atom::new("5", "CE", ResidueId::default(), Point3::origin()),
                )
                .unwrap();
            assert_eq!(structure.atom(atom_id).unwrap().residue_id, refs.lys);
        }

        #[test]
        fn upsert_atom_fails_for_missing_residue() {
            let mut structure = Structure::new();
            let atom = Atom::new("1", "CA", ResidueId::default(), Point3::origin());
            assert!(structure.upsert_atom(ResidueId::default(), atom).is_none());
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn lookups_by_labels_resolve_to_ids() {
            let (structure, refs) = create_standard_test_structure();
            assert_eq!(structure.find_chain_by_id("A"), Some(refs.chain_a));
            assert_eq!(structure.find_residue(refs.chain_a, "1"), Some(refs.ala));
            assert_eq!(
                structure.find_residue_by_key(&ResidueKey::new("B", "5")),
                Some(refs.lys)
            );
            assert!(structure.find_chain_by_id("Z").is_none());
            assert!(structure.find_residue(refs.chain_a, "77").is_none());
        }

        #[test]
        fn residue_key_round_trips_through_lookup() {
            let (structure, refs) = create_standard_test_structure();
            let key = structure.residue_key(refs.lys).unwrap();
            assert_eq!(key, ResidueKey::new("B", "5"));
            assert_eq!(structure.find_residue_by_key(&key), Some(refs.lys));
        }

        #[test]
        fn residue_positions_follow_atom_list_order() {
            let (structure, refs) = create_standard_test_structure();
            assert_eq!(
                structure.residue_positions(refs.ala).unwrap(),
                vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)]
            );
        }

        #[test]
        fn residues_in_order_groups_by_chain_order() {
            let (structure, _) = create_standard_test_structure();
            let keys: Vec<_> = structure
                .residues_in_order()
                .into_iter()
                .map(|id| structure.residue_key(id).unwrap().to_string())
                .collect();
            assert_eq!(keys, vec!["A:1", "A:2", "B:5"]);
        }

        #[test]
        fn composition_counts_match_contents() {
            let (structure, _) = create_standard_test_structure();
            assert_eq!(structure.chain_count(), 2);
            assert_eq!(structure.residue_count(), 3);
            assert_eq!(structure.atom_count(), 4);
            assert_eq!(structure.count_residues_named("LYS"), 2);
            assert_eq!(structure.count_residues_named("TRP"), 0);
            assert_eq!(
                structure.count_residues_named_per_chain("LYS"),
                vec![("A".to_string(), 1), ("B".to_string(), 1)]
            );
        }
    }

    mod enrichment {
        use super::*;

        #[test]
        fn attach_surface_areas_sets_matching_residues_and_reports_mismatches() {
            let (mut structure, refs) = create_standard_test_structure();
            let mut areas = ResidueSurfaceAreas::new();
            let ala_area = SurfaceArea {
                absolute: 80.0,
                relative: 0.7,
            };
            areas.insert(ResidueKey::new("A", "1"), ala_area);
            areas.insert(
                ResidueKey::new("C", "1"),
                SurfaceArea {
                    absolute: 1.0,
                    relative: 0.0,
                },
            );

            let report = structure.attach_surface_areas(&areas);

            assert_eq!(report.residues_enriched, 1);
            assert_eq!(report.chains_without_areas, vec!["B".to_string()]);
            assert_eq!(report.unknown_chains, vec!["C".to_string()]);
            assert_eq!(structure.residue(refs.ala).unwrap().surface_area, Some(ala_area));
            assert_eq!(structure.residue(refs.lys).unwrap().surface_area, None);
        }

        #[test]
        fn set_atom_surface_area_updates_only_that_atom() {
            let (mut structure, refs) = create_standard_test_structure();
            assert_eq!(structure.set_atom_surface_area(refs.ala_ca, 12.0), Some(()));
            assert_eq!(structure.atom(refs.ala_ca).unwrap().surface_area, Some(12.0));
            assert!(
                structure
                    .set_atom_surface_area(AtomId::default(), 1.0)
                    .is_none()
            );
        }
    }
}
