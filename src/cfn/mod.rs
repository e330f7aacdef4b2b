//! CloudFormation custom resource contract: the lifecycle event delivered to
//! the function and the completion response PUT back to the pre-signed URL.

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use url::Url;

/// Lifecycle phase of the custom resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

/// Event payload CloudFormation sends to the function.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceRequest {
    pub request_type: RequestType,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    #[serde(default)]
    pub physical_resource_id: Option<String>,
    #[serde(default)]
    pub resource_properties: Option<serde_json::Value>,
}

impl CustomResourceRequest {
    /// Stable across Create and Delete so CloudFormation never sees a
    /// replacement.
    fn physical_resource_id(&self) -> String {
        self.physical_resource_id
            .clone()
            .unwrap_or_else(|| "organization-access-analyzer".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub data: serde_json::Value,
}

impl CustomResourceResponse {
    fn for_request(request: &CustomResourceRequest, status: ResponseStatus) -> Self {
        Self {
            status,
            reason: None,
            physical_resource_id: request.physical_resource_id(),
            stack_id: request.stack_id.clone(),
            request_id: request.request_id.clone(),
            logical_resource_id: request.logical_resource_id.clone(),
            data: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Delivers the completion signal to CloudFormation's pre-signed S3 URL.
#[derive(Debug, Clone, Default)]
pub struct ResponseSender {
    client: reqwest::Client,
}

impl ResponseSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send_success(
        &self,
        request: &CustomResourceRequest,
        data: serde_json::Value,
    ) -> Result<()> {
        let mut response = CustomResourceResponse::for_request(request, ResponseStatus::Success);
        response.data = data;
        self.put(request, &response).await
    }

    pub async fn send_failed(
        &self,
        request: &CustomResourceRequest,
        reason: impl Into<String>,
    ) -> Result<()> {
        let mut response = CustomResourceResponse::for_request(request, ResponseStatus::Failed);
        response.reason = Some(reason.into());
        self.put(request, &response).await
    }

    async fn put(
        &self,
        request: &CustomResourceRequest,
        response: &CustomResourceResponse,
    ) -> Result<()> {
        let url = Url::parse(&request.response_url)?;
        let body = serde_json::to_string(response)?;

        tracing::debug!(
            status = ?response.status,
            request_id = %response.request_id,
            "delivering custom resource response"
        );

        // The pre-signed URL is signed with an empty content type, so the
        // usual application/json header must not be sent.
        self.client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
