use crate::config::DatasetLevel;
use crate::utils::constants::DEFAULT_INPUT_FILE;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "temperature-grid")]
#[command(about = "Builds gap-filled monthly temperature grids for heatmap rendering")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE, help = "Input CSV with date, max_temperature, min_temperature columns")]
    pub input: PathBuf,

    #[arg(long, value_enum, help = "Preset year range [default: level1]")]
    pub level: Option<DatasetLevel>,

    #[arg(long, help = "First year to include (overrides level and config)")]
    pub start_year: Option<i32>,

    #[arg(long, help = "Last year to include (overrides level and config)")]
    pub end_year: Option<i32>,

    #[arg(short, long, help = "Configuration file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = ",", value_parser = parse_delimiter, help = "Field delimiter of the input table")]
    pub delimiter: u8,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(format!("delimiter must be a single ASCII character, got '{}'", value)),
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a temperature table into the heatmap dataset
    Process {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[arg(short, long, help = "Output JSON file [default: stdout]")]
        output: Option<PathBuf>,

        #[arg(long, help = "Write compact JSON instead of pretty-printed")]
        compact: bool,
    },

    /// Report ingest and coverage statistics without writing output
    Info {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}
