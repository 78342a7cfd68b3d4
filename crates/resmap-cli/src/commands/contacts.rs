use super::load_structures;
use crate::cli::ContactsArgs;
use crate::config::PartialAnalysisConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use resmap::core::io::card;
use resmap::engine::progress::ProgressReporter;
use resmap::engine::selection::{ResidueSet, resolve_selection};
use resmap::engine::tasks::contact_map;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

pub fn run(args: ContactsArgs) -> Result<()> {
    let partial_config = PartialAnalysisConfig::load(args.analysis.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config
        .merge_with_cli(&args.analysis, args.threshold, None)?
        .core_config;

    let (structure, partner) =
        load_structures(&args.analysis.input, args.analysis.partner.as_deref())?;
    let structure_b = partner.as_ref().unwrap_or(&structure);

    let ids_a = resolve_selection(&structure, &config.selection_a)?;
    let ids_b = resolve_selection(structure_b, &config.selection_b)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let map = contact_map::run(
        &ResidueSet::new(&structure, &ids_a),
        &ResidueSet::new(structure_b, &ids_b),
        config.mode,
        config.contact_threshold,
        &reporter,
    )?;
    info!(
        rows = map.row_count(),
        contacts = map.contact_count(),
        "Contact map built."
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::writing(path, e))?;
            let mut writer = BufWriter::new(file);
            card::write_card(&map, &mut writer).map_err(|e| CliError::writing(path, e))?;
            writer.flush().map_err(|e| CliError::writing(path, e))?;
            println!(
                "✓ Contact card ({} rows, {} contacts) written to: {}",
                map.row_count(),
                map.contact_count(),
                path.display()
            );
        }
        None => {
            let mut out = std::io::stdout().lock();
            card::write_card(&map, &mut out).map_err(|e| CliError::writing("<stdout>", e))?;
        }
    }

    Ok(())
}
