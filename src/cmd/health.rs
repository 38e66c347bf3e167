use crate::reports;
use clap::Args;
use gradeform::client::PredictionClient;
use gradeform::config::Config;
use gradeform::error::GfResult;
use gradeform::fields::FieldRegistry;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct HealthArgs {
    #[command(flatten)]
    pub config: Config,
}

pub async fn run(_args: HealthArgs, config: &Config) -> GfResult<()> {
    let client = PredictionClient::new(&config.client);

    let health = client.health().await?;
    reports::print_health(&config.client.server, &health);

    match client.endpoint_info().await {
        Ok(endpoint) => {
            let registry = FieldRegistry::from_set(config.engine.field_set);
            let (not_on_server, not_local) = registry.diff(&endpoint.required_fields);
            if not_on_server.is_empty() && not_local.is_empty() {
                info!("✅ Server expects the same {} fields", registry.len());
            } else {
                if !not_on_server.is_empty() {
                    warn!("⚠️  Sent but not expected by server: {}", not_on_server.join(", "));
                }
                if !not_local.is_empty() {
                    warn!("⚠️  Required by server but not collected: {}", not_local.join(", "));
                }
            }
        }
        Err(e) => warn!("⚠️  Endpoint description unavailable: {}", e),
    }

    match client.model_info().await {
        Ok(model) => reports::print_model_info(&model),
        Err(e) => warn!("⚠️  Model info unavailable: {}", e),
    }

    Ok(())
}
