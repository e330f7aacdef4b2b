use crate::core::model::{
    account_analyzer_name, organization_analyzer_name, Account, AnalyzerType, ReconcileSummary,
};
use crate::core::ports::{AnalyzerService, OrganizationDirectory, RegionDirectory, TrailDirectory};
use crate::utils::error::Result;

/// Sequential reconciliation of the organization-wide Access Analyzer
/// capability. One instance per invocation; no state survives the run.
///
/// Per-analyzer and per-registration failures are classified and logged but
/// never stop the walk over regions and accounts. Failures of the directory
/// lookups themselves propagate and fail the whole invocation.
pub struct Reconciler<O, R, T, A> {
    orgs: O,
    regions: R,
    trail: T,
    analyzers: A,
    admin_account: String,
}

impl<O, R, T, A> Reconciler<O, R, T, A>
where
    O: OrganizationDirectory,
    R: RegionDirectory,
    T: TrailDirectory,
    A: AnalyzerService,
{
    pub fn new(
        orgs: O,
        regions: R,
        trail: T,
        analyzers: A,
        admin_account: impl Into<String>,
    ) -> Self {
        Self {
            orgs,
            regions,
            trail,
            analyzers,
            admin_account: admin_account.into(),
        }
    }

    /// Create-or-update path: ensure a delegated administrator is registered,
    /// then one ORGANIZATION-scope analyzer per governed region and one
    /// ACCOUNT-scope analyzer per active member account.
    pub async fn provision(&self) -> Result<ReconcileSummary> {
        let (regions, accounts, home_region) = self.discover().await?;
        let mut summary = ReconcileSummary {
            regions: regions.len(),
            ..ReconcileSummary::default()
        };

        self.ensure_delegated_administrator(&mut summary).await?;

        for region in &regions {
            let name = organization_analyzer_name(region);
            let result = self
                .analyzers
                .create_analyzer(&self.admin_account, region, &name, AnalyzerType::Organization)
                .await;
            self.record(
                &mut summary,
                result,
                "create organization analyzer",
                region,
            );
        }

        for account in accounts.iter().filter(|a| a.is_active()) {
            summary.active_accounts += 1;
            let name = account_analyzer_name(&account.id);
            let result = self
                .analyzers
                .create_analyzer(&account.id, &home_region, &name, AnalyzerType::Account)
                .await;
            self.record(&mut summary, result, "create account analyzer", &account.id);
        }

        Ok(summary)
    }

    /// Delete path: the structural mirror of [`provision`], followed by
    /// deregistration of the delegated administrator.
    ///
    /// [`provision`]: Reconciler::provision
    pub async fn decommission(&self) -> Result<ReconcileSummary> {
        let (regions, accounts, home_region) = self.discover().await?;
        let mut summary = ReconcileSummary {
            regions: regions.len(),
            ..ReconcileSummary::default()
        };

        for region in &regions {
            let name = organization_analyzer_name(region);
            let result = self
                .analyzers
                .delete_analyzer(&self.admin_account, region, &name)
                .await;
            self.record(
                &mut summary,
                result,
                "delete organization analyzer",
                region,
            );
        }

        for account in accounts.iter().filter(|a| a.is_active()) {
            summary.active_accounts += 1;
            let name = account_analyzer_name(&account.id);
            let result = self
                .analyzers
                .delete_analyzer(&account.id, &home_region, &name)
                .await;
            self.record(&mut summary, result, "delete account analyzer", &account.id);
        }

        // Deregistration closes out the delegated administration itself, so
        // unlike the per-analyzer calls a real failure here fails the run.
        match self
            .orgs
            .deregister_delegated_administrator(&self.admin_account)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    account_id = %self.admin_account,
                    "delegated administration for Access Analyzer is now disabled"
                );
                summary.applied += 1;
            }
            Err(err) if err.is_already_converged() => {
                tracing::info!(
                    account_id = %self.admin_account,
                    "delegated administrator was not registered"
                );
                summary.converged += 1;
            }
            Err(err) => return Err(err),
        }

        Ok(summary)
    }

    /// Fetch the externally-owned iteration sets for this run.
    async fn discover(&self) -> Result<(Vec<String>, Vec<Account>, String)> {
        let regions = self.regions.baseline_regions().await?;
        let accounts = self.orgs.list_accounts().await?;
        let home_region = self.trail.home_region().await?;
        tracing::info!(
            regions = regions.len(),
            accounts = accounts.len(),
            home_region = %home_region,
            "discovered reconciliation targets"
        );
        Ok((regions, accounts, home_region))
    }

    /// Register the configured account as delegated administrator unless one
    /// is already present. At most one registration attempt per run; a
    /// failure is logged and skipped.
    async fn ensure_delegated_administrator(&self, summary: &mut ReconcileSummary) -> Result<()> {
        if let Some(existing) = self.orgs.delegated_administrator().await? {
            tracing::info!(
                account_id = %existing,
                "delegated administration already configured for Access Analyzer"
            );
            summary.converged += 1;
            return Ok(());
        }

        match self
            .orgs
            .register_delegated_administrator(&self.admin_account)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    account_id = %self.admin_account,
                    "delegated administration for Access Analyzer is now configured"
                );
                summary.applied += 1;
            }
            Err(err) if err.is_already_converged() => {
                tracing::info!(account_id = %self.admin_account, "delegated administrator already registered");
                summary.converged += 1;
            }
            Err(err) => {
                tracing::warn!(
                    account_id = %self.admin_account,
                    error = %err,
                    "failed to register delegated administrator, continuing without it"
                );
                summary.failed += 1;
            }
        }

        Ok(())
    }

    fn record(
        &self,
        summary: &mut ReconcileSummary,
        result: Result<()>,
        operation: &str,
        subject: &str,
    ) {
        match result {
            Ok(()) => {
                tracing::info!(subject = %subject, "{operation} succeeded");
                summary.applied += 1;
            }
            Err(err) if err.is_already_converged() => {
                tracing::info!(subject = %subject, "{operation}: already in desired state");
                summary.converged += 1;
            }
            Err(err) => {
                tracing::warn!(subject = %subject, error = %err, "{operation} failed, continuing");
                summary.failed += 1;
            }
        }
    }
}
