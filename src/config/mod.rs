use crate::utils::error::{EnablerError, Result};
use crate::utils::validation::{validate_account_id, validate_role_name, Validate};
use std::env;

/// Required deployment settings. The environment variable names are part of
/// the deployment contract of the backing CloudFormation template.
#[derive(Debug, Clone)]
pub struct EnablerConfig {
    /// Account to designate as delegated administrator for Access Analyzer.
    pub delegated_admin_account: String,
    /// Cross-account role assumable in every member account.
    pub role_to_assume: String,
}

impl EnablerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            delegated_admin_account: env::var("ACCESS_ANALYSER_MASTER_ACCOUNT").map_err(|_| {
                EnablerError::Config {
                    message: "ACCESS_ANALYSER_MASTER_ACCOUNT environment variable is required"
                        .to_string(),
                }
            })?,
            role_to_assume: env::var("ROLE_TO_ASSUME").map_err(|_| EnablerError::Config {
                message: "ROLE_TO_ASSUME environment variable is required".to_string(),
            })?,
        })
    }
}

impl Validate for EnablerConfig {
    fn validate(&self) -> Result<()> {
        validate_account_id("delegated_admin_account", &self.delegated_admin_account)?;
        validate_role_name("role_to_assume", &self.role_to_assume)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_account_id_and_role_name() {
        let config = EnablerConfig {
            delegated_admin_account: "123456789012".to_string(),
            role_to_assume: "AWSControlTowerExecution".to_string(),
        };
        assert!(config.validate().is_ok());

        let bad_account = EnablerConfig {
            delegated_admin_account: "not-an-account".to_string(),
            ..config.clone()
        };
        assert!(bad_account.validate().is_err());

        let bad_role = EnablerConfig {
            role_to_assume: "role name with spaces".to_string(),
            ..config
        };
        assert!(bad_role.validate().is_err());
    }

    #[test]
    fn from_env_requires_both_settings() {
        // Single test so the process-wide environment is only touched once.
        env::remove_var("ACCESS_ANALYSER_MASTER_ACCOUNT");
        env::remove_var("ROLE_TO_ASSUME");
        assert!(EnablerConfig::from_env().is_err());

        env::set_var("ACCESS_ANALYSER_MASTER_ACCOUNT", "123456789012");
        assert!(EnablerConfig::from_env().is_err());

        env::set_var("ROLE_TO_ASSUME", "AWSControlTowerExecution");
        let config = EnablerConfig::from_env().unwrap();
        assert_eq!(config.delegated_admin_account, "123456789012");
        assert_eq!(config.role_to_assume, "AWSControlTowerExecution");

        env::remove_var("ACCESS_ANALYSER_MASTER_ACCOUNT");
        env::remove_var("ROLE_TO_ASSUME");
    }
}
