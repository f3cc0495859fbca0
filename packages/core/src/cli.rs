use clap::Parser;

/// Livestock Health Tracker CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "livestock-health-tracker",
    version,
    about = "Livestock movements, outbreaks and vaccination campaigns over HTTP"
)]
pub struct Cli {
    /// Address to bind (overrides LHT_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides LHT_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Path prefix for the API routes (overrides LHT_API_PREFIX)
    #[arg(long)]
    pub api_prefix: Option<String>,

    /// Start with empty stores instead of the sample records
    #[arg(long)]
    pub no_seed: bool,
}
