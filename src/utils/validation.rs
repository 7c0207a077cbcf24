use crate::utils::error::{Result, SkillError};
use url::Url;

/// Upper bound for any skill weight, in the taxonomy or in a request.
pub const MAX_WEIGHT: f64 = 1_000_000.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SkillError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 權重必須是有限且大於零的實數
pub fn validate_positive_weight(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Weight must be a finite number greater than zero".to_string(),
        });
    }
    if value > MAX_WEIGHT {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Weight must not exceed {}", MAX_WEIGHT),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension.to_ascii_lowercase().as_str()) => {
            Ok(())
        }
        Some(extension) => Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("resources.remote.endpoint", "https://example.com").is_ok());
        assert!(validate_url("resources.remote.endpoint", "http://example.com").is_ok());
        assert!(validate_url("resources.remote.endpoint", "").is_err());
        assert!(validate_url("resources.remote.endpoint", "invalid-url").is_err());
        assert!(validate_url("resources.remote.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("resources.limit", 3, 1).is_ok());
        assert!(validate_positive_number("resources.limit", 0, 1).is_err());
    }

    #[test]
    fn test_validate_positive_weight() {
        assert!(validate_positive_weight("weight", 0.5).is_ok());
        assert!(validate_positive_weight("weight", 0.0).is_err());
        assert!(validate_positive_weight("weight", -2.0).is_err());
        assert!(validate_positive_weight("weight", f64::NAN).is_err());
        assert!(validate_positive_weight("weight", f64::INFINITY).is_err());
        assert!(validate_positive_weight("weight", MAX_WEIGHT).is_ok());
        assert!(validate_positive_weight("weight", 1e307).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("taxonomy.path", "skills.toml", &["toml", "json"]).is_ok());
        assert!(validate_file_extension("taxonomy.path", "skills.JSON", &["toml", "json"]).is_ok());
        assert!(validate_file_extension("taxonomy.path", "skills.yaml", &["toml", "json"]).is_err());
        assert!(validate_file_extension("taxonomy.path", "skills", &["toml", "json"]).is_err());
    }
}
