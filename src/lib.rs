pub mod constants;
pub mod error;
pub mod models;
pub mod modules;
pub mod pipeline;
pub mod upstream;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

use modules::system::{config, logger, validation};
use pipeline::BatchSummary;
use tracing::{error, info, warn};

fn load_validated_config() -> Result<models::AppConfig, String> {
    let mut config =
        config::load_app_config().map_err(|e| format!("failed_to_load_config: {}", e))?;
    config::apply_env_overrides(&mut config);
    validation::validate_app_config(&config).map_err(|errors| {
        format!(
            "configuration_validation_failed:\n{}",
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        )
    })?;
    Ok(config)
}

async fn run_daily_batch(config: &models::AppConfig) -> Result<BatchSummary, String> {
    let accounts = modules::load_accounts(&config.input).map_err(|e| e.to_string())?;
    if accounts.is_empty() {
        warn!("Credential list {} is empty, nothing to do", config.input.data_file);
    }

    let (summary, _outcomes) = pipeline::run_batch(accounts, config).await;
    Ok(summary)
}

pub fn run() {
    logger::init_logger();

    let config = match load_validated_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Starting daily run against {} (max_attempts={}, game={})",
        config.base_url, config.retry.max_attempts, config.game.name
    );

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let result = runtime.block_on(run_daily_batch(&config));
    match result {
        Ok(summary) => {
            for line in &summary.details {
                info!("  - {}", line);
            }
            info!(
                "Daily run finished: {} succeeded, {} failed",
                summary.succeeded, summary.failed
            );
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
