use crate::utils::error::{ReorgError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReorgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_existing_dir(field_name: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReorgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path does not exist".to_string(),
        });
    }
    if !path.is_dir() {
        return Err(ReorgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path is not a directory".to_string(),
        });
    }
    Ok(())
}

/// A dotted chain of identifiers, e.g. `com.skillbridge`.
pub fn validate_package_name(field_name: &str, value: &str) -> Result<()> {
    let valid = !value.is_empty()
        && value.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });

    if !valid {
        return Err(ReorgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected dot-separated identifiers (e.g. com.example)".to_string(),
        });
    }
    Ok(())
}

pub fn validate_extension(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.starts_with('.') || value.contains('/') {
        return Err(ReorgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a bare file extension without a leading dot (e.g. java)".to_string(),
        });
    }
    Ok(())
}

/// A destination sub-path relative to the source root: no leading slash,
/// no parent traversal.
pub fn validate_sub_path(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.starts_with('/') || value.ends_with('/') {
        return Err(ReorgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Sub-path must be relative without leading or trailing slashes".to_string(),
        });
    }
    if value.split('/').any(|segment| segment.is_empty() || segment == "..") {
        return Err(ReorgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Sub-path must not contain empty or '..' segments".to_string(),
        });
    }
    Ok(())
}
