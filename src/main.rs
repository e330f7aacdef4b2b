use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use org_access_analyzer::aws::{
    AssumedRoleAnalyzerService, ControlTowerTrail, OrganizationsDirectory,
    StackSetRegionDirectory,
};
use org_access_analyzer::utils::logger;
use org_access_analyzer::utils::validation::Validate;
use org_access_analyzer::{
    CustomResourceRequest, EnablerConfig, Reconciler, ReconcileSummary, RequestType,
    ResponseSender,
};

async fn function_handler(event: LambdaEvent<CustomResourceRequest>) -> Result<(), Error> {
    let request = event.payload;
    tracing::info!(
        request_type = ?request.request_type,
        stack_id = %request.stack_id,
        request_id = %request.request_id,
        "handling custom resource request"
    );

    let sender = ResponseSender::new();
    match reconcile(&request).await {
        Ok(summary) => {
            tracing::info!(?summary, "reconciliation completed");
            sender
                .send_success(&request, serde_json::to_value(&summary)?)
                .await?;
        }
        Err(err) => {
            tracing::error!(error = %err, "reconciliation failed");
            sender.send_failed(&request, err.to_string()).await?;
        }
    }

    Ok(())
}

async fn reconcile(
    request: &CustomResourceRequest,
) -> org_access_analyzer::Result<ReconcileSummary> {
    let config = EnablerConfig::from_env()?;
    config.validate()?;

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let reconciler = Reconciler::new(
        OrganizationsDirectory::new(aws_sdk_organizations::Client::new(&aws_config)),
        StackSetRegionDirectory::new(aws_sdk_cloudformation::Client::new(&aws_config)),
        ControlTowerTrail::new(aws_sdk_cloudtrail::Client::new(&aws_config)),
        AssumedRoleAnalyzerService::new(&aws_config, config.role_to_assume.clone()),
        config.delegated_admin_account.clone(),
    );

    match request.request_type {
        RequestType::Create | RequestType::Update => reconciler.provision().await,
        RequestType::Delete => reconciler.decommission().await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();
    run(service_fn(function_handler)).await
}
