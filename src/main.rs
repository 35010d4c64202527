use actix_web::HttpServer;
use windchill_api::{AppConfig, AppMetrics, LoggingConfig, create_app, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing(&LoggingConfig::from_env()).map_err(std::io::Error::other)?;

    let config = AppConfig::from_env();
    let metrics = AppMetrics::new().map_err(std::io::Error::other)?;
    let bind_address = config.server.bind_address();

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        rounding = %config.windchill.rounding,
        metrics_enabled = config.metrics.enabled,
        "Starting Windchill API"
    );

    let workers = config.server.workers;
    let server = HttpServer::new(move || create_app(&config, metrics.clone()));
    let server = match workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server.bind(bind_address)?.run().await?;

    tracing::info!("Windchill API stopped");
    Ok(())
}
