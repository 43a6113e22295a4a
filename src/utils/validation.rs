use crate::utils::error::{GreeterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> GreeterError {
    GreeterError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// 問候語必須是單一個詞，例如 "Hello" 或 "Hi"
pub fn validate_salutation(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.chars().any(char::is_whitespace) {
        return Err(invalid(field_name, value, "Salutation must be a single word"));
    }

    if value.chars().any(char::is_control) {
        return Err(invalid(
            field_name,
            value,
            "Salutation contains control characters",
        ));
    }

    // ',' 和 '!' 屬於問候模板本身
    if value.contains([',', '!']) {
        return Err(invalid(
            field_name,
            value,
            "Salutation cannot contain ',' or '!'",
        ));
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(invalid(
            field_name,
            value,
            format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        ));
    }
    Ok(())
}
