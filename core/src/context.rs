use crate::config::{resolve_base_url, AppConfig, API_URL_ENV};
use crate::error::CliError;
use crate::service::BfhlService;
use std::sync::Arc;

pub trait ServiceFactory: Send + Sync {
    fn build_service(&self, cfg: &AppConfig) -> Result<Arc<dyn BfhlService>, CliError>;
}

#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    service: Arc<dyn BfhlService>,
}

impl AppContext {
    pub fn new(cfg: AppConfig, factory: &dyn ServiceFactory) -> Result<Self, CliError> {
        let service = factory.build_service(&cfg)?;
        Ok(Self { cfg, service })
    }

    pub fn with_service(cfg: AppConfig, service: Arc<dyn BfhlService>) -> Self {
        Self { cfg, service }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn service(&self) -> &dyn BfhlService {
        self.service.as_ref()
    }

    /// Base URL for the next request. Read fresh each time so env changes apply.
    pub fn base_url(&self, explicit: Option<&str>) -> Result<String, CliError> {
        resolve_base_url(&self.cfg, explicit).ok_or_else(|| {
            CliError::Config(format!(
                "no API base URL configured (use --base-url, {} or [api].base_url)",
                API_URL_ENV
            ))
        })
    }
}
