use std::sync::Arc;

use bfhl_core::api::{AppConfig, BfhlService, CliError, ServiceFactory};

use crate::service::HttpBfhlService;

pub fn build_service(cfg: &AppConfig) -> anyhow::Result<Arc<dyn BfhlService>> {
    let svc = HttpBfhlService::new(cfg.api.timeout_ms)?;
    tracing::debug!(target: "bfhl.plugins", service = svc.name(), timeout_ms = ?cfg.api.timeout_ms, "service built");
    Ok(Arc::new(svc))
}

/// Default factory used by the CLI.
pub struct PluginsServiceFactory;

impl ServiceFactory for PluginsServiceFactory {
    fn build_service(&self, cfg: &AppConfig) -> Result<Arc<dyn BfhlService>, CliError> {
        build_service(cfg).map_err(CliError::Anyhow)
    }
}
