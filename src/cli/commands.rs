//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jtimeline")]
#[command(
    about = "Merge dated journal entries and annotations into a week-grouped timeline",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Journal directory holding <YYYY-MM-DD>.<ext> entries (default: $JTIMELINE_DIR)
    #[arg(value_name = "JOURNAL_DIR")]
    pub journal_dir: Option<PathBuf>,

    /// Entry file extension, without the dot (default: md)
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extension: Option<String>,

    /// Also collect entries from nested, non-hidden directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Read annotation lines from a file instead of stdin
    #[arg(short, long, value_name = "FILE", conflicts_with = "no_annotations")]
    pub input: Option<PathBuf>,

    /// Do not read annotation lines at all
    #[arg(short = 'n', long)]
    pub no_annotations: bool,

    /// TOML config file (default: $JTIMELINE_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
