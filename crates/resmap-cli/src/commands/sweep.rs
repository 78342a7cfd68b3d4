use super::load_structures;
use crate::cli::SweepArgs;
use crate::config::{AnalysisConfig, PartialAnalysisConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use resmap::core::io::card;
use resmap::core::models::system::Structure;
use resmap::engine::progress::ProgressReporter;
use resmap::workflows::{self, interface::InterfaceReport};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: SweepArgs) -> Result<()> {
    let partial_config = PartialAnalysisConfig::load(args.analysis.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let analysis_config = partial_config.merge_with_cli(&args.analysis, None, Some(&args))?;

    let (mut structure, mut partner) =
        load_structures(&args.analysis.input, args.analysis.partner.as_deref())?;
    attach_surface_areas(&analysis_config, &mut structure, partner.as_mut());
    let config = analysis_config.core_config;
    let structure_b = partner.as_ref().unwrap_or(&structure);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Sweeping thresholds {}..={} Å ({} mode)...",
        config.sweep_range.start(),
        config.sweep_range.end(),
        config.mode
    );
    let report = workflows::interface::run(&structure, structure_b, &config, &reporter)?;

    print_summary(&report)?;

    if let Some(dir) = &args.card_dir {
        write_cards(&report, dir)?;
    }

    Ok(())
}

fn attach_surface_areas(
    config: &AnalysisConfig,
    structure: &mut Structure,
    partner: Option<&mut Structure>,
) {
    if let Some(areas) = &config.surface_areas {
        let enrichment = structure.attach_surface_areas(areas);
        info!(
            residues = enrichment.residues_enriched,
            "Surface areas attached to the input structure."
        );
    }
    match (&config.partner_surface_areas, partner) {
        (Some(areas), Some(partner)) => {
            let enrichment = partner.attach_surface_areas(areas);
            info!(
                residues = enrichment.residues_enriched,
                "Surface areas attached to the partner structure."
            );
        }
        (Some(_), None) => {
            warn!("A partner surface table was given without a partner structure.")
        }
        (None, _) => {}
    }
}

fn print_summary(report: &InterfaceReport) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match &report.correlations {
        Some(correlations) => {
            writeln!(out, "threshold\tinterface\tbelow_area\tdifference")?;
            for c in correlations {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    c.threshold, c.interface_residues, c.below_threshold_residues, c.difference
                )?;
            }
        }
        None => {
            writeln!(out, "threshold\tinterface")?;
            for count in &report.counts {
                writeln!(out, "{}\t{}", count.threshold, count.unique_residues)?;
            }
        }
    }
    Ok(())
}

fn write_cards(report: &InterfaceReport, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    for entry in &report.sweep {
        let path = dir.join(format!("contacts_{}.txt", entry.threshold));
        let file = File::create(&path).map_err(|e| CliError::writing(&path, e))?;
        let mut writer = BufWriter::new(file);
        card::write_card(&entry.map, &mut writer).map_err(|e| CliError::writing(&path, e))?;
        writer.flush().map_err(|e| CliError::writing(&path, e))?;
    }
    println!(
        "✓ {} contact card(s) written to: {}",
        report.sweep.len(),
        dir.display()
    );
    Ok(())
}
