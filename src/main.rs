mod app;
mod middlewares;
mod routes;
mod services;
mod types;
mod utils;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("airquality_api=info")),
        )
        .init();
    info!("Starting app...");

    let config = app::AppConfig::from_env()?;
    let bind_addr = config.bind_addr.clone();
    let app = app::gen_app(config);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
