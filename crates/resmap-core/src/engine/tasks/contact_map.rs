use crate::core::models::contact::{Contact, ContactMap, ContactRow};
use crate::engine::distance::{DistanceMode, PreparedResidue};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection::ResidueSet;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Extracts coordinates and centroids once per residue, before any pair is evaluated.
pub(crate) fn prepare_residues(set: &ResidueSet<'_>) -> Result<Vec<PreparedResidue>, EngineError> {
    set.residues()
        .iter()
        .map(|&id| PreparedResidue::from_structure(set.structure(), id))
        .collect()
}

/// Builds the contact map of `set_a` (rows) against `set_b` (columns).
///
/// A self-pair, the identical residue of the identical structure on both sides,
/// contributes nothing. A distance is retained only if it is strictly below
/// `threshold`; `None` retains everything.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResidue`] if either set holds a residue without atoms.
#[instrument(skip_all, name = "contact_map_task")]
pub fn run(
    set_a: &ResidueSet<'_>,
    set_b: &ResidueSet<'_>,
    mode: DistanceMode,
    threshold: Option<f64>,
    reporter: &ProgressReporter,
) -> Result<ContactMap, EngineError> {
    info!(
        rows = set_a.len(),
        columns = set_b.len(),
        %mode,
        ?threshold,
        "Building contact map."
    );

    let prepared_a = prepare_residues(set_a)?;
    let prepared_b = prepare_residues(set_b)?;
    let shared_structure = set_a.shares_structure_with(set_b);
    let ids_a = set_a.residues();
    let ids_b = set_b.residues();

    reporter.report(Progress::TaskStart {
        total_steps: prepared_a.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = prepared_a.iter().enumerate();

    #[cfg(feature = "parallel")]
    let iterator = prepared_a.par_iter().enumerate();

    let rows: Vec<ContactRow> = iterator
        .map(|(i, residue_a)| {
            let contacts = prepared_b
                .iter()
                .enumerate()
                .filter(|&(j, _)| !(shared_structure && ids_a[i] == ids_b[j]))
                .filter_map(|(_, residue_b)| {
                    let distance = residue_a.distance_to(residue_b, mode);
                    threshold
                        .is_none_or(|limit| distance < limit)
                        .then(|| Contact {
                            partner: residue_b.key.clone(),
                            distance,
                        })
                })
                .collect();

            reporter.report(Progress::TaskIncrement);
            ContactRow {
                residue: residue_a.key.clone(),
                contacts,
            }
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let map = if shared_structure {
        ContactMap::from_rows(rows)
    } else {
        ContactMap::between_structures(rows)
    };
    debug!(contacts = map.contact_count(), "Contact map complete.");
    Ok(map)
}
