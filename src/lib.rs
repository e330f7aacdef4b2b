pub mod aws;
pub mod cfn;
pub mod config;
pub mod core;
pub mod utils;

pub use cfn::{CustomResourceRequest, RequestType, ResponseSender, ResponseStatus};
pub use config::EnablerConfig;
pub use core::{Reconciler, ReconcileSummary};
pub use utils::error::{EnablerError, Result};
