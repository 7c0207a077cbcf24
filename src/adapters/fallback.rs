use crate::core::ResourceGateway;
use crate::domain::model::LearningResource;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Tries `primary` first and asks `secondary` only when the primary
/// lookup fails or comes back empty.
pub struct FallbackGateway<P, S> {
    primary: P,
    secondary: S,
}

impl<P: ResourceGateway, S: ResourceGateway> FallbackGateway<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl<P: ResourceGateway, S: ResourceGateway> ResourceGateway for FallbackGateway<P, S> {
    async fn fetch(&self, skill_id: &str, limit: usize) -> Result<Vec<LearningResource>> {
        match self.primary.fetch(skill_id, limit).await {
            Ok(resources) if !resources.is_empty() => return Ok(resources),
            Ok(_) => {
                tracing::debug!(
                    "No {} resources for '{}', falling back to {}",
                    self.primary.name(),
                    skill_id,
                    self.secondary.name()
                );
            }
            Err(e) => {
                tracing::warn!(
                    "{} lookup for '{}' failed ({}), falling back to {}",
                    self.primary.name(),
                    skill_id,
                    e,
                    self.secondary.name()
                );
            }
        }
        self.secondary.fetch(skill_id, limit).await
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
