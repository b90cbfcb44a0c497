use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "leak-detector")]
#[clap(about = "AI-powered landing page conversion analysis", long_about = None)]
pub struct Cli {
    /// Access token to use instead of the configured token source
    #[clap(long, global = true, env = "LEAK_DETECTOR_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
