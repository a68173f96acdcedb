use std::path::PathBuf;

/// Plan-scoring CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "gridmander", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Score a plan payload and print its metrics report
    Score(ScoreArgs),
}

#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    /// Input plan payload (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub plan: PathBuf,

    /// Also write the report to this file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pub pretty: bool,
}
