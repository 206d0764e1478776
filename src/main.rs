use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};

use activity_signup::config::ServerConfig;
use activity_signup::database::activities_repo::ActivitiesRepo;
use activity_signup::services::activities_service::ActivityDirectory;
use activity_signup::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // 2. Seed the activity directory
    let repo = ActivitiesRepo::seeded()?;
    info!(
        activities = repo.len(),
        build_id = env!("SIGNUP_BUILD_ID"),
        "activity directory seeded"
    );
    let directory = ActivityDirectory::new(repo);

    // 3. Build the application
    let app = web::router(directory, &config.static_dir);

    // 4. Start the server (with fallback port)
    let addr = config.addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let Some(fallback) = config.fallback_addr() else {
                return Err(e.into());
            };
            let fallback = fallback?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("🚀 Server running on http://{}", bound_addr);
    info!("📍 Open http://{}/ to sign up for activities", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
