pub mod model;
pub mod ports;
pub mod reconciler;

pub use model::{
    account_analyzer_name, organization_analyzer_name, Account, AccountStatus, AnalyzerType,
    ReconcileSummary,
};
pub use ports::{AnalyzerService, OrganizationDirectory, RegionDirectory, TrailDirectory};
pub use reconciler::Reconciler;
