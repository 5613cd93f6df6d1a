use crate::config::LogFormat;
use crate::constants::{APP_DESCRIPTION, APP_NAME};
use clap::Parser;

/// A small card-based journal driven by line commands on stdin
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Start with the demo entries instead of an empty journal
    #[arg(long)]
    pub seed_demo: bool,

    /// Log output format written to stderr
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Print verbose (debug) logs
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
