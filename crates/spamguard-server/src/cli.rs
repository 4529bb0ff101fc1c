//! Command-line interface

use clap::Parser;

use crate::config::ProviderKind;

/// SpamGuard server command-line arguments
#[derive(Parser, Debug)]
#[command(name = "spamguard-server")]
#[command(about = "SpamGuard AI classification server", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Classification backend
    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Model-serving endpoint URL
    #[arg(long)]
    pub model_service_url: Option<String>,

    /// Chat-completion gateway base URL
    #[arg(long)]
    pub gateway_url: Option<String>,

    /// Gateway model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Gateway bearer credential
    #[arg(long, env = "SPAMGUARD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    pub listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "8080")]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
