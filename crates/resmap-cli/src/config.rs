pub mod defaults;

use crate::cli::{AnalysisArgs, SweepArgs};
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use resmap::core::io::surface::read_surface_csv;
use resmap::core::models::ids::ResidueKey;
use resmap::core::models::surface::{ResidueSurfaceAreas, SurfaceMetric};
use resmap::engine::config::{InterfaceConfig, InterfaceConfigBuilder};
use resmap::engine::distance::DistanceMode;
use resmap::engine::selection::ResidueSelection;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialResidueSpecifier {
    chain: String,
    residue: String,
}

impl From<PartialResidueSpecifier> for ResidueKey {
    fn from(p: PartialResidueSpecifier) -> Self {
        ResidueKey::new(p.chain, p.residue)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case", tag = "type")]
enum PartialResidueSelection {
    All,
    Chains { chains: Vec<String> },
    List { residues: Vec<PartialResidueSpecifier> },
}

impl From<PartialResidueSelection> for ResidueSelection {
    fn from(p: PartialResidueSelection) -> Self {
        match p {
            PartialResidueSelection::All => ResidueSelection::All,
            PartialResidueSelection::Chains { chains } => ResidueSelection::Chains(chains),
            PartialResidueSelection::List { residues } => {
                ResidueSelection::List(residues.into_iter().map(Into::into).collect())
            }
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDistanceConfig {
    mode: Option<String>,
    #[serde(rename = "contact-threshold")]
    contact_threshold: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSweepConfig {
    start: Option<u32>,
    end: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSurfaceConfig {
    table: Option<PathBuf>,
    #[serde(rename = "partner-table")]
    partner_table: Option<PathBuf>,
    metric: Option<String>,
}

/// Engine configuration plus the surface-area tables to attach before a run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub core_config: InterfaceConfig,
    /// Areas for the input structure.
    pub surface_areas: Option<ResidueSurfaceAreas>,
    /// Areas for the partner structure.
    pub partner_surface_areas: Option<ResidueSurfaceAreas>,
}

/// Analysis settings as read from a TOML file; every field is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalysisConfig {
    distance: Option<PartialDistanceConfig>,
    sweep: Option<PartialSweepConfig>,
    surface: Option<PartialSurfaceConfig>,
    #[serde(rename = "selection-a")]
    selection_a: Option<PartialResidueSelection>,
    #[serde(rename = "selection-b")]
    selection_b: Option<PartialResidueSelection>,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::parsing(path, e))
    }

    /// Loads the file named by `--config`, or an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Merges file values with command-line arguments into an engine configuration.
    ///
    /// Command-line values win over file values, which win over
    /// [`DefaultsConfig`]. `sweep` carries the `sweep` subcommand's options, if any;
    /// surface tables are only loaded for sweeps.
    pub fn merge_with_cli(
        self,
        args: &AnalysisArgs,
        contact_threshold: Option<f64>,
        sweep: Option<&SweepArgs>,
    ) -> Result<AnalysisConfig> {
        let defaults = DefaultsConfig::default();
        let distance = self.distance.unwrap_or_default();
        let sweep_config = self.sweep.unwrap_or_default();
        let surface_config = self.surface.unwrap_or_default();

        let mode = match args.mode.as_ref().or(distance.mode.as_ref()) {
            Some(text) => text.parse::<DistanceMode>()?,
            None => defaults.mode,
        };

        let mut builder = InterfaceConfigBuilder::new()
            .selection_a(Self::merge_selection(&args.chains_a, self.selection_a))
            .selection_b(Self::merge_selection(&args.chains_b, self.selection_b))
            .mode(mode)
            .contact_threshold(contact_threshold.or(distance.contact_threshold))
            .sweep_start(
                sweep
                    .and_then(|s| s.start)
                    .or(sweep_config.start)
                    .unwrap_or(defaults.sweep_start),
            )
            .sweep_end(
                sweep
                    .and_then(|s| s.end)
                    .or(sweep_config.end)
                    .unwrap_or(defaults.sweep_end),
            );

        let mut surface_areas = None;
        let mut partner_surface_areas = None;
        if let Some(sweep_args) = sweep {
            let table = sweep_args.surface_csv.clone().or(surface_config.table);
            let partner_table = sweep_args
                .partner_surface_csv
                .clone()
                .or(surface_config.partner_table);

            if table.is_some() || partner_table.is_some() {
                let metric = match sweep_args
                    .surface_metric
                    .as_ref()
                    .or(surface_config.metric.as_ref())
                {
                    Some(text) => text
                        .parse::<SurfaceMetric>()
                        .map_err(|e| CliError::Argument(e.to_string()))?,
                    None => defaults.surface_metric,
                };
                builder = builder.surface_metric(metric);
                surface_areas = table.as_deref().map(Self::load_surface_table).transpose()?;
                partner_surface_areas = partner_table
                    .as_deref()
                    .map(Self::load_surface_table)
                    .transpose()?;
            }
        }

        let core_config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(AnalysisConfig {
            core_config,
            surface_areas,
            partner_surface_areas,
        })
    }

    fn load_surface_table(path: &Path) -> Result<ResidueSurfaceAreas> {
        debug!("Loading surface areas from {:?}", path);
        read_surface_csv(path).map_err(|e| CliError::parsing(path, e))
    }

    fn merge_selection(
        cli_chains: &[String],
        file_selection: Option<PartialResidueSelection>,
    ) -> ResidueSelection {
        if !cli_chains.is_empty() {
            ResidueSelection::Chains(cli_chains.to_vec())
        } else {
            file_selection.map(Into::into).unwrap_or_default()
        }
    }
}
