use clap::Parser;
use std::path::PathBuf;

use build_compat::compatibility::domain::ComponentCategory;

/// Check whether a set of PC components is compatible
#[derive(Parser, Debug)]
#[command(name = "build-compat")]
#[command(version)]
#[command(
    about = "Check whether a set of PC components is compatible",
    long_about = "Loads the component lists from a compatibility backend, selects one \
                  component per category and renders the backend's verdict as HTML."
)]
pub struct Args {
    /// Base URL of the compatibility backend (default: http://127.0.0.1:8000)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to a config file (defaults to build-compat.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// CPU, by option value or label
    #[arg(long, value_name = "VALUE")]
    pub cpu: Option<String>,

    /// GPU, by option value or label
    #[arg(long, value_name = "VALUE")]
    pub gpu: Option<String>,

    /// Motherboard, by option value or label
    #[arg(long, value_name = "VALUE")]
    pub motherboard: Option<String>,

    /// Memory kit, by option value or label
    #[arg(long, value_name = "VALUE")]
    pub memory: Option<String>,

    /// Power supply, by option value or label
    #[arg(long, value_name = "VALUE")]
    pub psu: Option<String>,

    /// Print the loaded component lists instead of running a check
    #[arg(long)]
    pub list: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested value for each category given on the command line
    pub fn requested(&self) -> Vec<(ComponentCategory, &str)> {
        [
            (ComponentCategory::Cpu, &self.cpu),
            (ComponentCategory::Gpu, &self.gpu),
            (ComponentCategory::Motherboard, &self.motherboard),
            (ComponentCategory::Memory, &self.memory),
            (ComponentCategory::Psu, &self.psu),
        ]
        .into_iter()
        .filter_map(|(category, value)| value.as_deref().map(|v| (category, v)))
        .collect()
    }
}
