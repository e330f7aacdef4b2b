use crate::aws::service_error;
use crate::core::model::AnalyzerType;
use crate::core::ports::AnalyzerService;
use crate::utils::error::{EnablerError, Result, ServiceErrorKind};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_accessanalyzer::config::{Credentials, Region};
use aws_sdk_accessanalyzer::types::Type;
use aws_sdk_accessanalyzer::Client as AnalyzerClient;
use aws_sdk_sts::Client as StsClient;

pub const ROLE_SESSION_NAME: &str = "EnableAccessAnalyzer";

/// Access Analyzer client factory that assumes the configured cross-account
/// role into the target account for every call. Temporary credentials are
/// deliberately not cached between iterations.
#[derive(Debug, Clone)]
pub struct AssumedRoleAnalyzerService {
    sts: StsClient,
    base_config: SdkConfig,
    role_name: String,
}

impl AssumedRoleAnalyzerService {
    pub fn new(base_config: &SdkConfig, role_name: String) -> Self {
        Self {
            sts: StsClient::new(base_config),
            base_config: base_config.clone(),
            role_name,
        }
    }

    async fn client_for(&self, account_id: &str, region: &str) -> Result<AnalyzerClient> {
        let role_arn = format!("arn:aws:iam::{account_id}:role/{}", self.role_name);
        let output = self
            .sts
            .assume_role()
            .role_arn(role_arn)
            .role_session_name(ROLE_SESSION_NAME)
            .send()
            .await
            .map_err(|e| service_error("sts", e))?;

        let creds = output.credentials().ok_or_else(|| EnablerError::Service {
            service: "sts",
            kind: ServiceErrorKind::Other,
            message: format!("assume_role for {account_id} returned no credentials"),
        })?;

        tracing::debug!(account_id = %account_id, "assumed cross-account role");

        let credentials = Credentials::new(
            creds.access_key_id(),
            creds.secret_access_key(),
            Some(creds.session_token().to_string()),
            None,
            "cross-account-assume-role",
        );
        let config = aws_sdk_accessanalyzer::config::Builder::from(&self.base_config)
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials)
            .build();

        Ok(AnalyzerClient::from_conf(config))
    }
}

#[async_trait]
impl AnalyzerService for AssumedRoleAnalyzerService {
    async fn create_analyzer(
        &self,
        account_id: &str,
        region: &str,
        name: &str,
        analyzer_type: AnalyzerType,
    ) -> Result<()> {
        let client = self.client_for(account_id, region).await?;
        let scope = match analyzer_type {
            AnalyzerType::Organization => Type::Organization,
            AnalyzerType::Account => Type::Account,
        };

        client
            .create_analyzer()
            .analyzer_name(name)
            .r#type(scope)
            .send()
            .await
            .map_err(|e| service_error("accessanalyzer", e))?;
        Ok(())
    }

    async fn delete_analyzer(&self, account_id: &str, region: &str, name: &str) -> Result<()> {
        let client = self.client_for(account_id, region).await?;

        client
            .delete_analyzer()
            .analyzer_name(name)
            .send()
            .await
            .map_err(|e| service_error("accessanalyzer", e))?;
        Ok(())
    }
}
