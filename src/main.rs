use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use club_signup::config::ServerConfig;
use club_signup::database::ActivitiesRepo;
use club_signup::web;

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().with_target(true).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = ServerConfig::from_env();
    init_logging(config.log_json);

    let repo = ActivitiesRepo::seeded();
    let app = web::build_router(repo, &config.static_dir);

    let addr = config.bind_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(addr = %bound_addr, static_dir = %config.static_dir.display(), "club signup listening");
    info!("open http://{}/ to reach the landing page", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
