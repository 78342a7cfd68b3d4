use crate::core::models::contact::ContactMap;
use crate::core::models::surface::SurfaceArea;
use crate::core::models::system::Structure;
use crate::engine::config::InterfaceConfig;
use crate::engine::error::EngineError;
use crate::engine::interface::{
    InterfaceCount, SurfaceCorrelation, correlate_with_surface_area, count_interface_residues,
};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection::{ResidueSet, resolve_selection};
use crate::engine::tasks::contact_map;
use crate::engine::tasks::threshold_sweep::{self, ThresholdMap};
use std::collections::HashSet;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct InterfaceReport {
    /// Contact map at the configured threshold.
    pub contact_map: ContactMap,
    pub sweep: Vec<ThresholdMap>,
    pub counts: Vec<InterfaceCount>,
    pub correlations: Option<Vec<SurfaceCorrelation>>,
}

/// Runs the interface analysis of `structure_a` against `structure_b`.
///
/// Passing the same structure twice compares a structure with itself; a
/// residue selected on both sides is then never paired with itself.
#[instrument(skip_all, name = "interface_workflow")]
pub fn run(
    structure_a: &Structure,
    structure_b: &Structure,
    config: &InterfaceConfig,
    reporter: &ProgressReporter,
) -> Result<InterfaceReport, EngineError> {
    // === Phase 1: Residue selection ===
    reporter.report(Progress::PhaseStart { name: "Selection" });
    let ids_a = resolve_selection(structure_a, &config.selection_a)?;
    let ids_b = resolve_selection(structure_b, &config.selection_b)?;
    let set_a = ResidueSet::new(structure_a, &ids_a);
    let set_b = ResidueSet::new(structure_b, &ids_b);
    info!(
        residues_a = set_a.len(),
        residues_b = set_b.len(),
        shared_structure = set_a.shares_structure_with(&set_b),
        "Resolved residue selections."
    );
    if set_a.is_empty() || set_b.is_empty() {
        warn!("A residue selection is empty; every map will be empty.");
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Unfiltered contact map ===
    reporter.report(Progress::PhaseStart {
        name: "Contact Map",
    });
    let unfiltered = contact_map::run(&set_a, &set_b, config.mode, None, reporter)?;
    let contact_map = match config.contact_threshold {
        Some(threshold) => unfiltered.with_threshold(threshold),
        None => unfiltered.clone(),
    };
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Threshold sweep ===
    reporter.report(Progress::PhaseStart {
        name: "Threshold Sweep",
    });
    let sweep = threshold_sweep::derive_from(&unfiltered, config.sweep_range.clone(), reporter);
    let counts = count_interface_residues(&sweep);
    for count in &counts {
        reporter.report(Progress::ThresholdCounted {
            threshold: count.threshold,
            unique_residues: count.unique_residues,
        });
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 4: Surface-area correlation ===
    let correlations = config.surface_metric.map(|metric| {
        reporter.report(Progress::PhaseStart {
            name: "Surface Correlation",
        });
        let areas = selected_surface_areas(&set_a, &set_b);
        if areas.is_empty() {
            warn!("No selected residue carries a surface area.");
        } else {
            info!(residues = areas.len(), "Correlating with attached surface areas.");
        }
        let correlations = correlate_with_surface_area(&counts, areas, metric);
        reporter.report(Progress::PhaseFinish);
        correlations
    });

    info!(
        contacts = contact_map.contact_count(),
        thresholds = counts.len(),
        "Interface analysis finished."
    );

    Ok(InterfaceReport {
        contact_map,
        sweep,
        counts,
        correlations,
    })
}

/// Surface areas attached to the residues of both selections.
///
/// A residue selected on both sides of one structure contributes a single area.
fn selected_surface_areas<'a>(
    set_a: &ResidueSet<'a>,
    set_b: &ResidueSet<'a>,
) -> Vec<&'a SurfaceArea> {
    let shared = set_a.shares_structure_with(set_b);
    let mut seen = HashSet::new();
    set_a
        .surface_areas()
        .chain(set_b.surface_areas())
        .filter(|(id, _)| !shared || seen.insert(*id))
        .map(|(_, area)| area)
        .collect()
}
