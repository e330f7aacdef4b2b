use crate::core::model::{Account, AnalyzerType};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Organization directory: membership and delegated administration for the
/// Access Analyzer service principal.
#[async_trait]
pub trait OrganizationDirectory: Send + Sync {
    /// Every member account with its lifecycle status, all pages.
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Account id of the current delegated administrator, if one is
    /// registered for the Access Analyzer service principal.
    async fn delegated_administrator(&self) -> Result<Option<String>>;

    async fn register_delegated_administrator(&self, account_id: &str) -> Result<()>;

    async fn deregister_delegated_administrator(&self, account_id: &str) -> Result<()>;
}

/// Regions governed by the deployment baseline.
#[async_trait]
pub trait RegionDirectory: Send + Sync {
    /// Deduplicated region placements of the baseline stack set. Returns an
    /// empty list when the lookup itself fails.
    async fn baseline_regions(&self) -> Result<Vec<String>>;
}

/// Home region of the organization's baseline audit trail.
#[async_trait]
pub trait TrailDirectory: Send + Sync {
    async fn home_region(&self) -> Result<String>;
}

/// Analyzer lifecycle inside one account/region pair. The production
/// implementation assumes the configured cross-account role into the target
/// account for every call; credentials are never cached between calls.
#[async_trait]
pub trait AnalyzerService: Send + Sync {
    async fn create_analyzer(
        &self,
        account_id: &str,
        region: &str,
        name: &str,
        analyzer_type: AnalyzerType,
    ) -> Result<()>;

    async fn delete_analyzer(&self, account_id: &str, region: &str, name: &str) -> Result<()>;
}
