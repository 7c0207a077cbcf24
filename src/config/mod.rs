pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::EngineConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "skill-intel")]
#[command(about = "Match candidate skills against job requirements and plan a learning roadmap")]
pub struct CliConfig {
    /// Skill taxonomy file (.toml or .json); overrides taxonomy.path
    #[arg(long)]
    pub taxonomy: Option<String>,

    /// Analysis request (JSON with required_skills and candidate_skills)
    #[arg(long)]
    pub request: Option<String>,

    /// Engine configuration file (TOML)
    #[arg(long)]
    pub config: Option<String>,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Maximum resources per roadmap step")]
    pub resource_limit: Option<usize>,

    #[arg(long, help = "Timeout for a single resource lookup in milliseconds")]
    pub timeout_ms: Option<u64>,

    #[arg(long, help = "Only load and validate the taxonomy")]
    pub check_only: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn apply_overrides(&self, config: &mut EngineConfig) {
        if let Some(path) = &self.taxonomy {
            config.taxonomy.path = Some(path.clone());
        }
        if let Some(limit) = self.resource_limit {
            config.resources.limit = limit;
        }
        if let Some(timeout) = self.timeout_ms {
            config.resources.timeout_ms = timeout;
        }
    }
}
