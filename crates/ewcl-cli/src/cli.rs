use clap::{Args, Parser, Subcommand, ValueEnum};
use ewcl::core::io::reference::ReferenceMetric;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "EWCL Platform Developers",
    version,
    about = "EWCL CLI - Validate per-residue protein disorder predictions against published experimental reference data.",
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

    /// Path to a threshold configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a threshold value, overriding the config file.
    /// Can be used multiple times. Example: -S validation.min-pearson=0.7
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the amino-acid sequence of a PDB structure.
    Sequence(SequenceArgs),
    /// Inspect the catalogue of benchmark structures with published reference data.
    Registry(RegistryArgs),
    /// Validate a prediction against the published reference series of a structure.
    Validate(ValidateArgs),
    /// Validate several predictions at once, one file per structure.
    Batch(BatchArgs),
    /// Compare two plain score series and label their agreement.
    Compare(CompareArgs),
    /// Score a structure with the built-in placeholder predictor.
    Predict(PredictArgs),
    /// Classify disorder scores into Low, Medium and High risk.
    Classify(ClassifyArgs),
}

/// Arguments for the `sequence` subcommand.
#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Path to the input PDB file.
    #[arg(value_name = "PDB")]
    pub input: PathBuf,

    /// List the alpha-carbon residues (chain, number, name) instead of the sequence.
    #[arg(long)]
    pub residues: bool,
}

/// Arguments for the `registry` subcommand.
#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Load the catalogue from a TOML file instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub catalogue: Option<PathBuf>,

    #[command(subcommand)]
    pub command: RegistryCommands,
}

#[derive(Subcommand, Debug)]
pub enum RegistryCommands {
    /// List every registered structure.
    List,
    /// Print one registry entry as JSON.
    Show {
        /// Structure identifier (case-insensitive), e.g. 1XQ8.
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// How reference CSV values are interpreted.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricArg {
    /// NMR S² order parameter, converted to disorder as 1 - S².
    OrderParameter,
    /// Values are already disorder scores.
    Disorder,
}

impl From<MetricArg> for ReferenceMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::OrderParameter => ReferenceMetric::OrderParameter,
            MetricArg::Disorder => ReferenceMetric::Disorder,
        }
    }
}

/// Reference data options shared by `validate` and `batch`.
#[derive(Args, Debug)]
pub struct ReferenceArgs {
    /// Directory holding `<id>_disorder.csv` reference files.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub reference_dir: PathBuf,

    /// Override the value interpretation recorded in the registry.
    #[arg(short, long, value_enum, value_name = "METRIC")]
    pub metric: Option<MetricArg>,

    /// Load the catalogue from a TOML file instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub catalogue: Option<PathBuf>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Structure identifier (case-insensitive), e.g. 1XQ8.
    #[arg(long, required = true, value_name = "ID")]
    pub id: String,

    /// JSON object mapping 1-based residue positions to scores, e.g. {"1": 0.42}.
    #[arg(short, long, required = true, value_name = "JSON")]
    pub predictions: PathBuf,

    #[command(flatten)]
    pub reference: ReferenceArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Prediction JSON files; each file stem is taken as the structure identifier.
    #[arg(required = true, value_name = "JSON")]
    pub predictions: Vec<PathBuf>,

    #[command(flatten)]
    pub reference: ReferenceArgs,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Reference CSV file (`residue,value` rows after a header).
    #[arg(short, long, required = true, value_name = "CSV")]
    pub reference: PathBuf,

    /// Prediction JSON file (position-keyed object).
    #[arg(short, long, required = true, value_name = "JSON")]
    pub prediction: PathBuf,

    /// How the reference values are interpreted.
    #[arg(short, long, value_enum, default_value = "order-parameter", value_name = "METRIC")]
    pub metric: MetricArg,
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Path to the input PDB file.
    #[arg(value_name = "PDB")]
    pub input: PathBuf,

    /// Number of decimal places in the printed scores.
    #[arg(long, default_value_t = 4, value_name = "INT")]
    pub precision: u32,
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// One or more disorder scores.
    #[arg(required = true, value_name = "SCORE", allow_negative_numbers = true)]
    pub scores: Vec<f64>,
}
