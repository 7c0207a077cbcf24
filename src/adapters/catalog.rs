use crate::core::taxonomy::exact_key;
use crate::core::ResourceGateway;
use crate::domain::model::LearningResource;
use crate::utils::error::{Result, SkillError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// Hand-curated resources keyed by canonical skill id.
///
/// File format: `{"python": [{"title": "...", "url": "...", "type": "..."}]}`.
#[derive(Debug, Clone, Default)]
pub struct StaticResourceCatalog {
    entries: HashMap<String, Vec<LearningResource>>,
}

impl StaticResourceCatalog {
    pub fn new(entries: HashMap<String, Vec<LearningResource>>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(skill, resources)| (exact_key(&skill), resources))
            .collect();
        Self { entries }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SkillError::IoError)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded curated resources for {} skills from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let entries: HashMap<String, Vec<LearningResource>> = serde_json::from_str(content)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ResourceGateway for StaticResourceCatalog {
    async fn fetch(&self, skill_id: &str, limit: usize) -> Result<Vec<LearningResource>> {
        Ok(self
            .entries
            .get(&exact_key(skill_id))
            .map(|resources| resources.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        "catalog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"{
        "Python": [
            {"title": "Python Crash Course", "url": "https://learn.example/python", "type": "Course"},
            {"title": "Official Tutorial", "url": "https://docs.python.org/3/tutorial/", "type": "Documentation"}
        ],
        "sql": [
            {"title": "SQLBolt", "url": "https://sqlbolt.com", "type": "Interactive"}
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_known_skill_respects_limit() {
        let catalog = StaticResourceCatalog::from_json_str(CATALOG).unwrap();

        let resources = catalog.fetch("python", 1).await.unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].title, "Python Crash Course");
        assert_eq!(resources[0].kind, "Course");
    }

    #[tokio::test]
    async fn test_fetch_unknown_skill_is_empty() {
        let catalog = StaticResourceCatalog::from_json_str(CATALOG).unwrap();
        let resources = tokio_test::assert_ok!(catalog.fetch("fortran", 3).await);
        assert!(resources.is_empty());
    }

    #[test]
    fn test_catalog_from_file() {
        let mut temp_file = NamedTempFile::with_suffix(".json").unwrap();
        temp_file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = StaticResourceCatalog::from_file(temp_file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        assert!(matches!(
            StaticResourceCatalog::from_json_str("{\"python\": 3}"),
            Err(SkillError::SerializationError(_))
        ));
    }
}
