use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "resmap - residue-level contact maps and interface analysis for \
             macromolecular structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the chains, residues and atoms of a structure file.
    Info(InfoArgs),
    /// Build a residue contact map and write it as a contact card.
    Contacts(ContactsArgs),
    /// Count interface residues over a range of distance thresholds.
    Sweep(SweepArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input structure file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Count residues of this three-letter type, overall and per chain.
    #[arg(short = 't', long, value_name = "NAME")]
    pub residue_type: Option<String>,

    /// List every residue in file order.
    #[arg(long)]
    pub list: bool,
}

/// Inputs and residue selection shared by the analysis subcommands.
#[derive(Args, Debug, Default)]
pub struct AnalysisArgs {
    /// Path to the structure file providing the row residues.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Optional second structure file providing the column residues.
    /// Without it, the input structure is compared with itself.
    #[arg(short, long, value_name = "PATH")]
    pub partner: Option<PathBuf>,

    /// Path to an analysis configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Chains of the row residues (comma-separated). Defaults to every residue.
    #[arg(short = 'a', long, value_name = "IDS", value_delimiter = ',')]
    pub chains_a: Vec<String>,

    /// Chains of the column residues (comma-separated). Defaults to every residue.
    #[arg(short = 'b', long, value_name = "IDS", value_delimiter = ',')]
    pub chains_b: Vec<String>,

    /// Residue distance mode: 'atom' (closest atom pair) or 'centroid'.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,
}

/// Arguments for the `contacts` subcommand.
#[derive(Args, Debug)]
pub struct ContactsArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Keep only distances strictly below this value, in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    /// Path for the output contact card. Printed to stdout if omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `sweep` subcommand.
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// First threshold of the sweep, in whole Angstroms.
    #[arg(long, value_name = "INT")]
    pub start: Option<u32>,

    /// Last threshold of the sweep (inclusive), in whole Angstroms.
    #[arg(long, value_name = "INT")]
    pub end: Option<u32>,

    /// CSV table of per-residue surface areas (`chain,residue,absolute,relative`).
    #[arg(long, value_name = "PATH")]
    pub surface_csv: Option<PathBuf>,

    /// Surface-area table for the partner structure, when one is given.
    #[arg(long, value_name = "PATH", requires = "partner")]
    pub partner_surface_csv: Option<PathBuf>,

    /// Surface-area column compared with each threshold: 'absolute' or 'relative'.
    #[arg(long, value_name = "METRIC")]
    pub surface_metric: Option<String>,

    /// Directory receiving one contact card per threshold.
    #[arg(long, value_name = "DIR")]
    pub card_dir: Option<PathBuf>,
}
