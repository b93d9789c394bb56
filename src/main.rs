//! Planner's Assistant API server.

use std::error::Error;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use planners_assistant::adapters::http::{app, ApiRepositories};
use planners_assistant::adapters::memory::sample_seed;
use planners_assistant::config::{AppConfig, ConfigError};

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.features.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("could not register signal handlers, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config);

    let repos = if config.features.seed_fixtures {
        let seed = sample_seed()?;
        info!(
            policies = seed.policies.len(),
            sites = seed.sites.len(),
            applications = seed.applications.len(),
            documents = seed.documents.len(),
            "seeding repositories from sample catalog"
        );
        ApiRepositories::seeded(seed)
    } else {
        ApiRepositories::in_memory()
    };

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        environment = ?config.server.environment,
        "planners-assistant listening on {addr}"
    );

    axum::serve(listener, app(repos, &config.server))
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}
