use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "yaml-diff",
    about = "Structural, order-insensitive diff of multi-document YAML files",
    version
)]
pub struct Cli {
    /// The two files to compare
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Treat null and empty mappings/sequences as missing keys
    #[arg(long)]
    pub ignore_empty_fields: bool,

    /// Treat "", 0 and false as missing keys
    #[arg(long)]
    pub ignore_zero_fields: bool,

    /// Print only differing documents, without the header
    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// TOML file with default settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
