use crate::utils::error::{EnablerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EnablerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// AWS account identifiers are exactly twelve ASCII digits.
pub fn validate_account_id(field_name: &str, account_id: &str) -> Result<()> {
    if account_id.len() != 12 || !account_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(EnablerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: account_id.to_string(),
            reason: "account id must be exactly 12 digits".to_string(),
        });
    }
    Ok(())
}

/// IAM role names: up to 64 characters from the IAM name charset.
pub fn validate_role_name(field_name: &str, role_name: &str) -> Result<()> {
    validate_non_empty_string(field_name, role_name)?;

    if role_name.len() > 64 {
        return Err(EnablerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: role_name.to_string(),
            reason: "role name must be at most 64 characters".to_string(),
        });
    }

    if !role_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "+=,.@_-".contains(c))
    {
        return Err(EnablerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: role_name.to_string(),
            reason: "role name contains characters outside the IAM name charset".to_string(),
        });
    }

    Ok(())
}
