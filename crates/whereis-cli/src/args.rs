use clap::{Parser, Subcommand, ValueEnum};
use whereis_core::SimilarityMetric;

/// CLI arguments for whereis-cli
#[derive(Debug, Parser)]
#[command(
    name = "whereis",
    version,
    about = "Resolve campus building names and codes, the way the ~whereis bot command does"
)]
pub struct CliArgs {
    /// Path to a building dataset (.json or .json.gz). Defaults to the bundled dataset.
    #[arg(short = 'i', long = "input", env = "WHEREIS_DATASET", global = true)]
    pub input: Option<String>,

    /// Base URL of the building map images; replies link to `<url>/<CODE>.png`
    #[arg(long = "image-url", env = "WHEREIS_IMAGE_URL", global = true)]
    pub image_url: Option<String>,

    /// Similarity function used for fuzzy matching
    #[arg(long, value_enum, default_value_t = Metric::Dice, global = true)]
    pub metric: Metric,

    /// Minimum fuzzy score in (0, 1]; defaults to the metric's own threshold
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Log resolution details to stderr (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up a building by name or code (`whereis list` lists all buildings)
    Whereis {
        /// Building name or code; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List all building codes and their full names
    List,

    /// Show a summary of the directory contents
    Stats,

    /// Read bot messages (e.g. `~whereis erie hall`) from stdin and print replies
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    /// Bigram overlap (Sørensen–Dice)
    Dice,
    /// Jaro-Winkler
    JaroWinkler,
}

impl From<Metric> for SimilarityMetric {
    fn from(m: Metric) -> Self {
        match m {
            Metric::Dice => SimilarityMetric::SorensenDice,
            Metric::JaroWinkler => SimilarityMetric::JaroWinkler,
        }
    }
}
