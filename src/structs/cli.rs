use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "issue-analyzer")]
#[clap(about = "AI-powered GitHub issue analysis", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
