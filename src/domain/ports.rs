use crate::domain::model::LearningResource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Settings the engine needs at request time.
pub trait ConfigProvider: Send + Sync {
    fn resource_limit(&self) -> usize;
    fn lookup_timeout(&self) -> Duration;
    fn concurrent_lookups(&self) -> usize;
}

/// Source of learning resources for a canonical skill id.
///
/// Implementations must return an empty list for ids they know nothing
/// about. Timeouts are applied by the caller; retries, if any, belong here.
#[async_trait]
pub trait ResourceGateway: Send + Sync {
    async fn fetch(&self, skill_id: &str, limit: usize) -> Result<Vec<LearningResource>>;

    fn name(&self) -> &str {
        "gateway"
    }
}

#[async_trait]
impl<G: ResourceGateway + ?Sized> ResourceGateway for Arc<G> {
    async fn fetch(&self, skill_id: &str, limit: usize) -> Result<Vec<LearningResource>> {
        (**self).fetch(skill_id, limit).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
