//! End-to-end reconciliation through the public API with in-memory service
//! doubles, mirroring how the function drives a real estate: two governed
//! regions, two active accounts and one suspended account.

use anyhow::Result;
use async_trait::async_trait;
use org_access_analyzer::core::{
    Account, AccountStatus, AnalyzerService, AnalyzerType, OrganizationDirectory, RegionDirectory,
    TrailDirectory,
};
use org_access_analyzer::Reconciler;
use org_access_analyzer::Result as ApiResult;
use std::sync::Arc;
use tokio::sync::Mutex;

const ADMIN_ACCOUNT: &str = "999999999999";

#[derive(Clone, Default)]
struct FakeEstate {
    delegated_admin: Arc<Mutex<Option<String>>>,
    analyzers: Arc<Mutex<Vec<(String, String, String)>>>,
}

#[async_trait]
impl OrganizationDirectory for FakeEstate {
    async fn list_accounts(&self) -> ApiResult<Vec<Account>> {
        Ok(vec![
            Account {
                id: "111111111111".to_string(),
                status: AccountStatus::Active,
            },
            Account {
                id: "222222222222".to_string(),
                status: AccountStatus::Active,
            },
            Account {
                id: "333333333333".to_string(),
                status: AccountStatus::Suspended,
            },
        ])
    }

    async fn delegated_administrator(&self) -> ApiResult<Option<String>> {
        Ok(self.delegated_admin.lock().await.clone())
    }

    async fn register_delegated_administrator(&self, account_id: &str) -> ApiResult<()> {
        *self.delegated_admin.lock().await = Some(account_id.to_string());
        Ok(())
    }

    async fn deregister_delegated_administrator(&self, _account_id: &str) -> ApiResult<()> {
        *self.delegated_admin.lock().await = None;
        Ok(())
    }
}

#[async_trait]
impl RegionDirectory for FakeEstate {
    async fn baseline_regions(&self) -> ApiResult<Vec<String>> {
        Ok(vec!["us-east-1".to_string(), "eu-west-1".to_string()])
    }
}

#[async_trait]
impl TrailDirectory for FakeEstate {
    async fn home_region(&self) -> ApiResult<String> {
        Ok("us-east-1".to_string())
    }
}

#[async_trait]
impl AnalyzerService for FakeEstate {
    async fn create_analyzer(
        &self,
        account_id: &str,
        region: &str,
        name: &str,
        _analyzer_type: AnalyzerType,
    ) -> ApiResult<()> {
        self.analyzers.lock().await.push((
            account_id.to_string(),
            region.to_string(),
            name.to_string(),
        ));
        Ok(())
    }

    async fn delete_analyzer(&self, account_id: &str, region: &str, name: &str) -> ApiResult<()> {
        let mut analyzers = self.analyzers.lock().await;
        analyzers.retain(|(a, r, n)| !(a == account_id && r == region && n == name));
        Ok(())
    }
}

#[tokio::test]
async fn create_then_delete_returns_the_estate_to_its_initial_state() -> Result<()> {
    let estate = FakeEstate::default();
    let reconciler = Reconciler::new(
        estate.clone(),
        estate.clone(),
        estate.clone(),
        estate.clone(),
        ADMIN_ACCOUNT,
    );

    let summary = reconciler.provision().await?;
    assert_eq!(summary.regions, 2);
    assert_eq!(summary.active_accounts, 2);
    assert_eq!(summary.failed, 0);

    {
        let analyzers = estate.analyzers.lock().await;
        assert_eq!(analyzers.len(), 4);
        assert!(analyzers.contains(&(
            ADMIN_ACCOUNT.to_string(),
            "us-east-1".to_string(),
            "Organization-Zone-of-Trust-us-east-1".to_string()
        )));
        assert!(analyzers.contains(&(
            ADMIN_ACCOUNT.to_string(),
            "eu-west-1".to_string(),
            "Organization-Zone-of-Trust-eu-west-1".to_string()
        )));
        assert!(analyzers.contains(&(
            "111111111111".to_string(),
            "us-east-1".to_string(),
            "Account-Zone-of-Trust-111111111111".to_string()
        )));
        assert!(analyzers.contains(&(
            "222222222222".to_string(),
            "us-east-1".to_string(),
            "Account-Zone-of-Trust-222222222222".to_string()
        )));
    }
    assert_eq!(
        estate.delegated_admin.lock().await.as_deref(),
        Some(ADMIN_ACCOUNT)
    );

    let summary = reconciler.decommission().await?;
    assert_eq!(summary.failed, 0);
    assert!(estate.analyzers.lock().await.is_empty());
    assert!(estate.delegated_admin.lock().await.is_none());
    Ok(())
}

#[tokio::test]
async fn second_provision_run_is_idempotent_at_the_directory_level() -> Result<()> {
    let estate = FakeEstate::default();
    let reconciler = Reconciler::new(
        estate.clone(),
        estate.clone(),
        estate.clone(),
        estate.clone(),
        ADMIN_ACCOUNT,
    );

    reconciler.provision().await?;
    let second = reconciler.provision().await?;

    // The delegated administrator is rediscovered, not re-registered.
    assert_eq!(second.converged, 1);
    assert_eq!(
        estate.delegated_admin.lock().await.as_deref(),
        Some(ADMIN_ACCOUNT)
    );
    Ok(())
}
