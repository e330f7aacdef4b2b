use crate::aws::service_error;
use crate::core::ports::TrailDirectory;
use crate::utils::error::{EnablerError, Result, ServiceErrorKind};
use async_trait::async_trait;
use aws_sdk_cloudtrail::Client;

/// Audit trail laid down by the Control Tower baseline; its home region is
/// where ACCOUNT-scope analyzers are provisioned.
pub const BASELINE_TRAIL: &str = "aws-controltower-BaselineCloudTrail";

#[derive(Debug, Clone)]
pub struct ControlTowerTrail {
    client: Client,
}

impl ControlTowerTrail {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TrailDirectory for ControlTowerTrail {
    async fn home_region(&self) -> Result<String> {
        let output = self
            .client
            .describe_trails()
            .trail_name_list(BASELINE_TRAIL)
            .send()
            .await
            .map_err(|e| service_error("cloudtrail", e))?;

        output
            .trail_list()
            .first()
            .and_then(|trail| trail.home_region())
            .map(str::to_string)
            .ok_or_else(|| EnablerError::Service {
                service: "cloudtrail",
                kind: ServiceErrorKind::NotFound,
                message: format!("trail {BASELINE_TRAIL} not found"),
            })
    }
}
