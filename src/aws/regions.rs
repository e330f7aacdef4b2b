use crate::aws::service_error;
use crate::core::ports::RegionDirectory;
use crate::utils::error::Result;
use async_trait::async_trait;
use aws_sdk_cloudformation::Client;
use std::collections::BTreeSet;

/// Control Tower baseline stack set whose instance placements enumerate the
/// governed regions.
pub const BASELINE_STACK_SET: &str = "AWSControlTowerBP-BASELINE-CONFIG";

/// Derives the governed region set from the baseline stack set's instances.
#[derive(Debug, Clone)]
pub struct StackSetRegionDirectory {
    client: Client,
}

impl StackSetRegionDirectory {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_regions(&self) -> Result<Vec<String>> {
        let mut regions = BTreeSet::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .client
                .list_stack_instances()
                .stack_set_name(BASELINE_STACK_SET)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| service_error("cloudformation", e))?;

            for summary in page.summaries() {
                if let Some(region) = summary.region() {
                    regions.insert(region.to_string());
                }
            }

            next_token = page.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        Ok(regions.into_iter().collect())
    }
}

#[async_trait]
impl RegionDirectory for StackSetRegionDirectory {
    async fn baseline_regions(&self) -> Result<Vec<String>> {
        match self.fetch_regions().await {
            Ok(regions) => {
                tracing::info!(?regions, "Control Tower regions");
                Ok(regions)
            }
            Err(err) => {
                tracing::warn!(
                    stack_set = BASELINE_STACK_SET,
                    error = %err,
                    "failed to list stack instances, proceeding with no regions"
                );
                Ok(Vec::new())
            }
        }
    }
}
