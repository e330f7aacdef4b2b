use crate::aws::service_error;
use crate::core::model::{Account, AccountStatus};
use crate::core::ports::OrganizationDirectory;
use crate::utils::error::Result;
use async_trait::async_trait;
use aws_sdk_organizations::types::AccountStatus as SdkAccountStatus;
use aws_sdk_organizations::Client;

/// Service principal under which Access Analyzer delegated administration is
/// registered.
pub const ACCESS_ANALYZER_PRINCIPAL: &str = "access-analyzer.amazonaws.com";

/// AWS Organizations as the organization directory.
#[derive(Debug, Clone)]
pub struct OrganizationsDirectory {
    client: Client,
}

impl OrganizationsDirectory {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrganizationDirectory for OrganizationsDirectory {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        let mut accounts = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .client
                .list_accounts()
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| service_error("organizations", e))?;

            for member in page.accounts() {
                let (Some(id), Some(status)) = (member.id(), member.status()) else {
                    continue;
                };
                accounts.push(Account {
                    id: id.to_string(),
                    status: map_status(status),
                });
            }

            next_token = page.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        Ok(accounts)
    }

    async fn delegated_administrator(&self) -> Result<Option<String>> {
        let output = self
            .client
            .list_delegated_administrators()
            .service_principal(ACCESS_ANALYZER_PRINCIPAL)
            .send()
            .await
            .map_err(|e| service_error("organizations", e))?;

        Ok(output
            .delegated_administrators()
            .first()
            .and_then(|admin| admin.id())
            .map(str::to_string))
    }

    async fn register_delegated_administrator(&self, account_id: &str) -> Result<()> {
        self.client
            .register_delegated_administrator()
            .account_id(account_id)
            .service_principal(ACCESS_ANALYZER_PRINCIPAL)
            .send()
            .await
            .map_err(|e| service_error("organizations", e))?;
        Ok(())
    }

    async fn deregister_delegated_administrator(&self, account_id: &str) -> Result<()> {
        self.client
            .deregister_delegated_administrator()
            .account_id(account_id)
            .service_principal(ACCESS_ANALYZER_PRINCIPAL)
            .send()
            .await
            .map_err(|e| service_error("organizations", e))?;
        Ok(())
    }
}

fn map_status(status: &SdkAccountStatus) -> AccountStatus {
    match status {
        SdkAccountStatus::Active => AccountStatus::Active,
        SdkAccountStatus::Suspended => AccountStatus::Suspended,
        SdkAccountStatus::PendingClosure => AccountStatus::PendingClosure,
        _ => AccountStatus::Unknown,
    }
}
