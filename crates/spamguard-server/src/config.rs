//! Server configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::Cli;

/// Which backend classifies text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Dedicated model-serving endpoint
    ModelService,
    /// LLM gateway with a tool-forced verdict
    #[default]
    Gateway,
}

impl ProviderKind {
    /// Config-file name of this backend
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::ModelService => "model_service",
            ProviderKind::Gateway => "gateway",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Which backend classifies text
    #[serde(default)]
    pub provider: ProviderKind,

    /// Model-serving endpoint URL
    #[serde(default = "default_model_service_url")]
    pub model_service_url: String,

    /// LLM gateway settings
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// LLM gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Chat-completion API base URL
    #[serde(default = "default_gateway_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_gateway_model")]
    pub model: String,

    /// Bearer credential, normally supplied via SPAMGUARD_API_KEY
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(provider) = cli.provider {
            config.provider = provider;
        }

        if let Some(url) = &cli.model_service_url {
            config.model_service_url = url.clone();
        }

        if let Some(url) = &cli.gateway_url {
            config.gateway.base_url = url.clone();
        }

        if let Some(model) = &cli.model {
            config.gateway.model = model.clone();
        }

        if let Some(key) = &cli.api_key {
            config.gateway.api_key = Some(key.clone());
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model_service_url: default_model_service_url(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_gateway_url(),
            model: default_gateway_model(),
            api_key: None,
        }
    }
}

fn default_model_service_url() -> String {
    spamguard_providers::DEFAULT_MODEL_SERVICE_URL.to_string()
}

fn default_gateway_url() -> String {
    spamguard_providers::DEFAULT_GATEWAY_URL.to_string()
}

fn default_gateway_model() -> String {
    spamguard_providers::DEFAULT_GATEWAY_MODEL.to_string()
}
