use crate::core::roadmap::RoadmapPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SkillError};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_positive_number,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub taxonomy: TaxonomyConfig,
    pub resources: ResourcesConfig,
    pub roadmap: RoadmapPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    pub limit: usize,
    pub timeout_ms: u64,
    pub concurrent_lookups: usize,
    pub catalog_path: Option<String>,
    pub remote: Option<RemoteConfig>,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            limit: 3,
            timeout_ms: 2000,
            concurrent_lookups: 4,
            catalog_path: None,
            remote: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_query_suffix")]
    pub query_suffix: String,
}

fn default_query_suffix() -> String {
    "tutorial for beginners".to_string()
}

impl EngineConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SkillError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| SkillError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${YOUTUBE_API_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| SkillError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.taxonomy.path {
            validate_path("taxonomy.path", path)?;
            validate_file_extension("taxonomy.path", path, &["toml", "json"])?;
        }

        validate_positive_number("resources.limit", self.resources.limit as u64, 1)?;
        validate_positive_number("resources.timeout_ms", self.resources.timeout_ms, 1)?;
        validate_positive_number(
            "resources.concurrent_lookups",
            self.resources.concurrent_lookups as u64,
            1,
        )?;

        if let Some(catalog) = &self.resources.catalog_path {
            validate_path("resources.catalog_path", catalog)?;
            validate_file_extension("resources.catalog_path", catalog, &["json"])?;
        }

        if let Some(remote) = &self.resources.remote {
            validate_url("resources.remote.endpoint", &remote.endpoint)?;
            validate_non_empty_string("resources.remote.api_key", &remote.api_key)?;
            if remote.api_key.contains("${") {
                return Err(SkillError::MissingConfigError {
                    field: "resources.remote.api_key".to_string(),
                });
            }
        }

        self.roadmap.validate()
    }

    pub fn taxonomy_path(&self) -> Option<&str> {
        self.taxonomy.path.as_deref()
    }

    pub fn roadmap_policy(&self) -> &RoadmapPolicy {
        &self.roadmap
    }
}

impl ConfigProvider for EngineConfig {
    fn resource_limit(&self) -> usize {
        self.resources.limit
    }

    fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.resources.timeout_ms)
    }

    fn concurrent_lookups(&self) -> usize {
        self.resources.concurrent_lookups
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
