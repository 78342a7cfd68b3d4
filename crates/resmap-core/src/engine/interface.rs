//! Interface summaries derived from a threshold sweep.

use super::tasks::threshold_sweep::ThresholdMap;
use crate::core::models::surface::{SurfaceArea, SurfaceMetric};
use serde::Serialize;
use tracing::debug;

/// Number of distinct residues in contact at one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterfaceCount {
    pub threshold: u32,
    pub unique_residues: usize,
}

/// Counts, for every threshold map, the distinct residues taking part in at
/// least one surviving contact.
///
/// Within one structure a residue that appears both as a row and as a partner
/// is counted once. Residues of two different structures are always counted
/// separately, even when their chain and residue labels coincide.
pub fn count_interface_residues(maps: &[ThresholdMap]) -> Vec<InterfaceCount> {
    maps.iter()
        .map(|entry| {
            let unique_residues = entry.map.interface_residues().len();
            debug!(threshold = entry.threshold, unique_residues, "Counted interface residues.");
            InterfaceCount {
                threshold: entry.threshold,
                unique_residues,
            }
        })
        .collect()
}

/// Interface size at a threshold set against the buried-surface estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceCorrelation {
    pub threshold: u32,
    pub interface_residues: usize,
    /// Residues whose surface area is strictly below the threshold.
    pub below_threshold_residues: usize,
    /// `interface_residues - below_threshold_residues`.
    pub difference: i64,
}

/// Compares interface counts with the number of `areas` whose value under
/// `metric` falls strictly below each threshold.
///
/// `areas` should hold one entry per analyzed residue; the interface workflow
/// passes the areas attached to the selected residues.
pub fn correlate_with_surface_area<'a>(
    counts: &[InterfaceCount],
    areas: impl IntoIterator<Item = &'a SurfaceArea>,
    metric: SurfaceMetric,
) -> Vec<SurfaceCorrelation> {
    let mut values: Vec<f64> = areas
        .into_iter()
        .map(|area| metric.value_of(area))
        .collect();
    values.sort_by(f64::total_cmp);

    counts
        .iter()
        .map(|count| {
            let limit = f64::from(count.threshold);
            let below_threshold_residues = values.partition_point(|&value| value < limit);
            SurfaceCorrelation {
                threshold: count.threshold,
                interface_residues: count.unique_residues,
                below_threshold_residues,
                difference: count.unique_residues as i64 - below_threshold_residues as i64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::pdb::PdbFile;
    use crate::core::io::traits::StructureFile;
    use crate::core::models::contact::{Contact, ContactMap, ContactRow};
    use crate::core::models::ids::ResidueKey;
    use crate::core::models::surface::ResidueSurfaceAreas;
    use crate::engine::distance::DistanceMode;
    use crate::engine::progress::ProgressReporter;
    use crate::engine::selection::{ResidueSelection, ResidueSet, resolve_selection};
    use crate::engine::tasks::threshold_sweep;

    fn threshold_map(threshold: u32, rows: Vec<(&str, Vec<(&str, f64)>)>) -> ThresholdMap {
        let rows = rows
            .into_iter()
            .map(|(residue, contacts)| ContactRow {
                residue: ResidueKey::new("A", residue),
                contacts: contacts
                    .into_iter()
                    .map(|(partner, distance)| Contact {
                        partner: ResidueKey::new("B", partner),
                        distance,
                    })
                    .collect(),
            })
            .collect();
        ThresholdMap {
            threshold,
            map: ContactMap::from_rows(rows),
        }
    }

    #[test]
    fn shared_partners_are_counted_once() {
        let maps = vec![threshold_map(
            5,
            vec![
                ("1", vec![("1", 2.0), ("2", 3.0)]),
                ("2", vec![("1", 4.0)]),
                ("3", vec![]),
            ],
        )];
        let counts = count_interface_residues(&maps);
        assert_eq!(
            counts,
            vec![InterfaceCount {
                threshold: 5,
                unique_residues: 4
            }]
        );
    }

    #[test]
    fn equal_labels_in_two_structures_count_as_two_residues() {
        let first =
            PdbFile::parse_str("ATOM 1 CA ALA A 1 0.000 0.000 0.000 1.00 0.00\n").unwrap();
        let second =
            PdbFile::parse_str("ATOM 1 CA GLY A 1 0.500 0.000 0.000 1.00 0.00\n").unwrap();
        let a = resolve_selection(&first, &ResidueSelection::All).unwrap();
        let b = resolve_selection(&second, &ResidueSelection::All).unwrap();

        let maps = threshold_sweep::run(
            &ResidueSet::new(&first, &a),
            &ResidueSet::new(&second, &b),
            DistanceMode::Atom,
            1..=1,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(maps[0].map.contact_count(), 1);
        assert_eq!(
            count_interface_residues(&maps),
            vec![InterfaceCount {
                threshold: 1,
                unique_residues: 2
            }]
        );
    }

    #[test]
    fn counts_never_decrease_as_the_threshold_grows() {
        let content = "\
ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00  0.00
ATOM      2  CB  ALA A   1       0.500   1.200   0.000  1.00  0.00
ATOM      3  CA  LEU A   2       3.800   0.000   0.000  1.00  0.00
ATOM      4  CA  SER A   3       7.600   0.400   0.000  1.00  0.00
ATOM      5  CA  GLY B   1       1.000   4.500   0.000  1.00  0.00
ATOM      6  CA  TRP B   2       4.500   6.000   1.000  1.00  0.00
ATOM      7  CB  TRP B   2       5.000   7.500   1.500  1.00  0.00
ATOM      8  CA  ASP B   3       9.000   9.000   2.000  1.00  0.00
";
        let structure = PdbFile::parse_str(content).unwrap();
        let a =
            resolve_selection(&structure, &ResidueSelection::Chains(vec!["A".into()])).unwrap();
        let b =
            resolve_selection(&structure, &ResidueSelection::Chains(vec!["B".into()])).unwrap();

        for mode in [DistanceMode::Atom, DistanceMode::Centroid] {
            let maps = threshold_sweep::run(
                &ResidueSet::new(&structure, &a),
                &ResidueSet::new(&structure, &b),
                mode,
                1..=10,
                &ProgressReporter::new(),
            )
            .unwrap();
            let counts = count_interface_residues(&maps);
            assert_eq!(counts.len(), 10);
            for pair in counts.windows(2) {
                assert!(pair[0].unique_residues <= pair[1].unique_residues);
            }
            assert_eq!(counts[9].unique_residues, 6);
        }
    }

    #[test]
    fn correlation_counts_residues_strictly_below_each_threshold() {
        let areas: ResidueSurfaceAreas = [
            ("1", 1.5, 0.01),
            ("2", 2.0, 0.02),
            ("3", 40.0, 0.5),
        ]
        .into_iter()
        .map(|(residue, absolute, relative)| {
            (
                ResidueKey::new("A", residue),
                SurfaceArea { absolute, relative },
            )
        })
        .collect();
        let counts = vec![
            InterfaceCount {
                threshold: 2,
                unique_residues: 3,
            },
            InterfaceCount {
                threshold: 3,
                unique_residues: 1,
            },
        ];

        let absolute =
            correlate_with_surface_area(&counts, areas.values(), SurfaceMetric::Absolute);
        assert_eq!(absolute[0].below_threshold_residues, 1);
        assert_eq!(absolute[0].difference, 2);
        assert_eq!(absolute[1].below_threshold_residues, 2);
        assert_eq!(absolute[1].difference, -1);

        let relative =
            correlate_with_surface_area(&counts, areas.values(), SurfaceMetric::Relative);
        assert!(relative.iter().all(|c| c.below_threshold_residues == 3));
    }
}
