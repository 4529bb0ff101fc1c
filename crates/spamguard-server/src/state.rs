//! Shared application state

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use spamguard_providers::{
    ClassificationProvider, ExplanationProvider, GatewayProvider, ModelServiceProvider,
};
use tracing::info;

use crate::config::{ProviderKind, ServerConfig};

/// Shared state passed to all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Classification backend
    pub classifier: Arc<dyn ClassificationProvider>,
    /// Explanation backend
    pub explainer: Arc<dyn ExplanationProvider>,
    /// Prometheus metrics handle
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Create application state, wiring providers from the configuration
    pub fn new(config: ServerConfig, metrics_handle: PrometheusHandle) -> Self {
        let gateway = Arc::new(GatewayProvider::new(
            config.gateway.base_url.clone(),
            config.gateway.model.clone(),
            config.gateway.api_key.clone(),
        ));

        let classifier: Arc<dyn ClassificationProvider> = match config.provider {
            ProviderKind::ModelService => {
                info!(url = %config.model_service_url, "Using model service classifier");
                Arc::new(ModelServiceProvider::new(config.model_service_url.clone()))
            }
            ProviderKind::Gateway => {
                info!(model = %config.gateway.model, "Using gateway classifier");
                gateway.clone()
            }
        };

        Self::with_providers(config, classifier, gateway, metrics_handle)
    }

    /// Create application state with explicit providers
    pub fn with_providers(
        config: ServerConfig,
        classifier: Arc<dyn ClassificationProvider>,
        explainer: Arc<dyn ExplanationProvider>,
        metrics_handle: PrometheusHandle,
    ) -> Self {
        Self {
            config: Arc::new(config),
            classifier,
            explainer,
            metrics_handle,
        }
    }

    /// Whether the gateway credential is present
    pub fn credential_configured(&self) -> bool {
        self.config.gateway.api_key.is_some()
    }
}
