use super::contact_map;
use crate::core::models::contact::ContactMap;
use crate::engine::distance::DistanceMode;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection::ResidueSet;
use std::ops::RangeInclusive;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The contact map retained at one integer threshold of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdMap {
    pub threshold: u32,
    pub map: ContactMap,
}

/// Computes one contact map per integer threshold in `range`, ascending.
///
/// The unfiltered map is built once; every threshold map is derived from it.
/// An empty range yields no maps.
#[instrument(skip_all, name = "threshold_sweep_task")]
pub fn run(
    set_a: &ResidueSet<'_>,
    set_b: &ResidueSet<'_>,
    mode: DistanceMode,
    range: RangeInclusive<u32>,
    reporter: &ProgressReporter,
) -> Result<Vec<ThresholdMap>, EngineError> {
    let unfiltered = contact_map::run(set_a, set_b, mode, None, reporter)?;
    Ok(derive_from(&unfiltered, range, reporter))
}

/// Derives the threshold maps of a sweep from an already built unfiltered map.
pub fn derive_from(
    unfiltered: &ContactMap,
    range: RangeInclusive<u32>,
    reporter: &ProgressReporter,
) -> Vec<ThresholdMap> {
    let thresholds: Vec<u32> = range.collect();
    info!(
        thresholds = thresholds.len(),
        first = ?thresholds.first(),
        last = ?thresholds.last(),
        "Deriving threshold maps."
    );

    reporter.report(Progress::TaskStart {
        total_steps: thresholds.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = thresholds.iter();

    #[cfg(feature = "parallel")]
    let iterator = thresholds.par_iter();

    let maps = iterator
        .map(|&threshold| {
            let map = unfiltered.with_threshold(f64::from(threshold));
            reporter.report(Progress::TaskIncrement);
            ThresholdMap { threshold, map }
        })
        .collect();

    reporter.report(Progress::TaskFinish);
    maps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::pdb::PdbFile;
    use crate::core::io::traits::StructureFile;
    use crate::engine::selection::{ResidueSelection, resolve_selection};

    const LADDER: &str = "\
ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00  0.00
ATOM      2  CA  ALA A   2      10.000   0.000   0.000  1.00  0.00
ATOM      3  CA  GLY B   1       0.000   2.500   0.000  1.00  0.00
ATOM      4  CA  GLY B   2      10.000   6.000   0.000  1.00  0.00
ATOM      5  CA  GLY B   3       0.000   0.000   8.000  1.00  0.00
";

    fn sweep(range: RangeInclusive<u32>) -> Vec<ThresholdMap> {
        let structure = PdbFile::parse_str(LADDER).unwrap();
        let a = resolve_selection(&structure, &ResidueSelection::Chains(vec!["A".into()])).unwrap();
        let b = resolve_selection(&structure, &ResidueSelection::Chains(vec!["B".into()])).unwrap();
        run(
            &ResidueSet::new(&structure, &a),
            &ResidueSet::new(&structure, &b),
            DistanceMode::Atom,
            range,
            &ProgressReporter::new(),
        )
        .unwrap()
    }

    #[test]
    fn produces_one_ascending_map_per_threshold() {
        let maps = sweep(1..=10);
        let thresholds: Vec<u32> = maps.iter().map(|m| m.threshold).collect();
        assert_eq!(thresholds, (1..=10).collect::<Vec<_>>());
        assert!(maps.iter().all(|m| m.map.row_count() == 2));
    }

    #[test]
    fn contacts_appear_once_the_threshold_exceeds_them() {
        let maps = sweep(1..=10);
        let counts: Vec<usize> = maps.iter().map(|m| m.map.contact_count()).collect();
        // Distances: 2.5, 6.0, 8.0 plus the far pairs beyond 10.
        assert_eq!(counts, vec![0, 0, 1, 1, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn derived_maps_match_direct_thresholding() {
        let structure = PdbFile::parse_str(LADDER).unwrap();
        let all = resolve_selection(&structure, &ResidueSelection::All).unwrap();
        let set = ResidueSet::new(&structure, &all);
        let reporter = ProgressReporter::new();

        let unfiltered =
            contact_map::run(&set, &set, DistanceMode::Centroid, None, &reporter).unwrap();
        for entry in derive_from(&unfiltered, 3..=7, &reporter) {
            let direct = contact_map::run(
                &set,
                &set,
                DistanceMode::Centroid,
                Some(f64::from(entry.threshold)),
                &reporter,
            )
            .unwrap();
            assert_eq!(entry.map, direct);
        }
    }

    #[test]
    fn empty_range_yields_no_maps() {
        #[allow(clippy::reversed_empty_ranges)]
        let maps = sweep(5..=4);
        assert!(maps.is_empty());
    }
}
