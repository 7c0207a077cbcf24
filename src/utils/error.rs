use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Resource request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Alias '{alias}' resolves to both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("Skill '{skill}' requires unknown prerequisite '{prerequisite}'")]
    UnknownPrerequisite { skill: String, prerequisite: String },

    #[error("Skill '{skill}' has non-positive weight {weight}")]
    NonPositiveWeight { skill: String, weight: f64 },

    #[error("Prerequisite cycle detected: {}", .cycle.join(" -> "))]
    PrerequisiteCycle { cycle: Vec<String> },

    #[error("Invalid analysis request: {message}")]
    InvalidRequest { message: String },

    #[error("Resource lookup failed for '{skill}': {message}")]
    ResourceLookupError { skill: String, message: String },

    #[error("Internal consistency fault: {message}")]
    InternalConsistencyError { message: String, skills: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Request,
    ResourceLookup,
    Internal,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SkillError {
    pub fn config(message: impl Into<String>) -> Self {
        SkillError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SkillError::ConfigError { .. }
            | SkillError::InvalidConfigValueError { .. }
            | SkillError::MissingConfigError { .. }
            | SkillError::DuplicateAlias { .. }
            | SkillError::UnknownPrerequisite { .. }
            | SkillError::NonPositiveWeight { .. }
            | SkillError::PrerequisiteCycle { .. } => ErrorCategory::Config,
            SkillError::InvalidRequest { .. } | SkillError::SerializationError(_) => {
                ErrorCategory::Request
            }
            SkillError::ApiError(_) | SkillError::ResourceLookupError { .. } => {
                ErrorCategory::ResourceLookup
            }
            SkillError::InternalConsistencyError { .. } => ErrorCategory::Internal,
            SkillError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 資源查詢失敗只會讓該步驟沒有資源
            ErrorCategory::ResourceLookup => ErrorSeverity::Low,
            ErrorCategory::Request => ErrorSeverity::Medium,
            ErrorCategory::Config | ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn is_config_error(&self) -> bool {
        self.category() == ErrorCategory::Config
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SkillError::InternalConsistencyError { .. } => {
                "The analysis could not be completed because of an internal error".to_string()
            }
            SkillError::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SkillError::DuplicateAlias { .. } => {
                "Remove the alias from one of the two skills in the taxonomy file"
            }
            SkillError::UnknownPrerequisite { .. } => {
                "Add the missing skill to the taxonomy or drop the prerequisite edge"
            }
            SkillError::NonPositiveWeight { .. } => "Give every skill a weight greater than zero",
            SkillError::PrerequisiteCycle { .. } => {
                "Break the cycle by removing one of the listed prerequisite edges"
            }
            SkillError::ConfigError { .. }
            | SkillError::InvalidConfigValueError { .. }
            | SkillError::MissingConfigError { .. } => "Check the configuration file syntax and values",
            SkillError::InvalidRequest { .. } | SkillError::SerializationError(_) => {
                "Check the analysis request; explicit weights must be positive numbers"
            }
            SkillError::ApiError(_) | SkillError::ResourceLookupError { .. } => {
                "Check network access and the resource endpoint settings"
            }
            SkillError::InternalConsistencyError { .. } => {
                "Validate the taxonomy file and report the logged skill ids"
            }
            SkillError::IoError(_) => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillError>;
