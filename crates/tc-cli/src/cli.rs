//! Command-line arguments

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "telemetry-compare",
    version,
    about = "Compare an AWS IoT shadow export with a device display readout"
)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "TELEMETRY_COMPARE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the per-parameter comparison report
    Compare(CompareArgs),
    /// Print the detected format of each file
    Sniff {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Shadow export (`"name": value` pairs)
    #[arg(long, value_name = "FILE")]
    pub shadow: Option<PathBuf>,

    /// Device display readout
    #[arg(long, value_name = "FILE")]
    pub device: Option<PathBuf>,

    /// Files routed to a slot by detected format; later files replace
    /// earlier ones, and --shadow/--device take precedence
    #[arg(long = "input", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Base name of the report file (".txt" is appended)
    #[arg(long)]
    pub output_name: Option<String>,

    /// Directory the report file is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the report to stdout instead of writing a file
    #[arg(long, default_value_t = false)]
    pub stdout: bool,

    /// Print the report as JSON to stdout instead of writing a file
    #[arg(long, default_value_t = false, conflicts_with = "stdout")]
    pub json: bool,
}
