// Adapters layer: concrete ResourceGateway implementations for the engine.

pub mod catalog;
pub mod fallback;
pub mod http;

use crate::config::toml_config::ResourcesConfig;
use crate::core::ResourceGateway;
use crate::domain::model::LearningResource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub use catalog::StaticResourceCatalog;
pub use fallback::FallbackGateway;
pub use http::HttpResourceGateway;

/// Gateway that never has anything to offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGateway;

#[async_trait]
impl ResourceGateway for NoopGateway {
    async fn fetch(&self, _skill_id: &str, _limit: usize) -> Result<Vec<LearningResource>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "none"
    }
}

/// 依設定組合資源來源：精選清單優先，遠端搜尋作為備援
pub fn gateway_from_config(config: &ResourcesConfig) -> Result<Arc<dyn ResourceGateway>> {
    let catalog = config
        .catalog_path
        .as_ref()
        .map(StaticResourceCatalog::from_file)
        .transpose()?;
    let remote = config.remote.as_ref().map(|remote| {
        HttpResourceGateway::new(remote).with_timeout(Duration::from_millis(config.timeout_ms))
    });

    let gateway: Arc<dyn ResourceGateway> = match (catalog, remote) {
        (Some(catalog), Some(remote)) => Arc::new(FallbackGateway::new(catalog, remote)),
        (Some(catalog), None) => Arc::new(catalog),
        (None, Some(remote)) => Arc::new(remote),
        (None, None) => Arc::new(NoopGateway),
    };

    tracing::debug!("Resource gateway: {}", gateway.name());
    Ok(gateway)
}
