use crate::utils::error::{LookupError, Result};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LookupError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LookupError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(LookupError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &Path,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match file.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(LookupError::InvalidConfigValue {
            field: field_name.to_string(),
            value: file.display().to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(LookupError::InvalidConfigValue {
            field: field_name.to_string(),
            value: file.display().to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("wait_timeout_secs", 20, 1).is_ok());
        assert!(validate_positive_number("wait_timeout_secs", 0, 1).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("codes_file", Path::new("codes.csv"), &["csv", "tsv"]).is_ok());
        assert!(validate_file_extension("codes_file", Path::new("codes.xlsx"), &["csv", "tsv"]).is_err());
        assert!(validate_file_extension("codes_file", Path::new("codes"), &["csv", "tsv"]).is_err());
    }
}
