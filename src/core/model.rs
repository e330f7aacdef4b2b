use serde::Serialize;

/// A member account of the organization, as reported by the directory.
/// Re-fetched on every invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub status: AccountStatus,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Suspended,
    PendingClosure,
    Unknown,
}

/// Zone of trust an analyzer evaluates access paths within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerType {
    /// Organization-wide zone of trust, lives in the delegated admin account.
    Organization,
    /// Single-account zone of trust, lives in each member account.
    Account,
}

/// Name of the ORGANIZATION-scope analyzer provisioned in a governed region.
pub fn organization_analyzer_name(region: &str) -> String {
    format!("Organization-Zone-of-Trust-{region}")
}

/// Name of the ACCOUNT-scope analyzer provisioned in a member account.
pub fn account_analyzer_name(account_id: &str) -> String {
    format!("Account-Zone-of-Trust-{account_id}")
}

/// Counts reported back to the caller after a provision or decommission run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReconcileSummary {
    /// Governed regions discovered from the baseline stack set.
    pub regions: usize,
    /// Active member accounts targeted.
    pub active_accounts: usize,
    /// Analyzer creates/deletes and registrations that took effect.
    pub applied: usize,
    /// Calls that found the resource already in the desired state.
    pub converged: usize,
    /// Calls that failed for reasons other than convergence.
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_names_are_deterministic() {
        assert_eq!(
            organization_analyzer_name("eu-west-1"),
            "Organization-Zone-of-Trust-eu-west-1"
        );
        assert_eq!(
            account_analyzer_name("123456789012"),
            "Account-Zone-of-Trust-123456789012"
        );
    }

    #[test]
    fn only_active_accounts_are_active() {
        let active = Account {
            id: "111111111111".to_string(),
            status: AccountStatus::Active,
        };
        let suspended = Account {
            id: "222222222222".to_string(),
            status: AccountStatus::Suspended,
        };
        assert!(active.is_active());
        assert!(!suspended.is_active());
    }
}
