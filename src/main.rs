use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use cmc_server::config::AppConfig;
use cmc_server::database::client::{Database, DbConfig};
use cmc_server::init;
use cmc_server::likes::LikeDispatcher;
use cmc_server::middleware::error::{AppError, AppResult};
use cmc_server::middleware::mw_ctx;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,surrealdb=warn")),
        )
        .init();

    let db = Database::connect(DbConfig {
        url: &config.db_url,
        database: &config.db_database,
        namespace: &config.db_namespace,
        password: config.db_password.as_deref(),
        username: config.db_username.as_deref(),
    })
    .await?;

    init::run_migrations(&db).await?;

    let registry = init::create_like_registry(&db);
    info!(targets = ?registry.targets(), "like handlers registered");
    let likes = LikeDispatcher::new(Arc::new(registry));
    let ctx_state = mw_ctx::create_ctx_state(db, likes, &config);

    if let Err(err) = init::create_default_data_for_dev(&ctx_state).await {
        warn!("->> could not create development data: {err}");
    }

    let routes_all = init::main_router(&ctx_state);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server_port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Generic {
            description: format!("bind {addr}: {e}"),
        })?;
    info!("->> LISTENING on {addr}");

    axum::serve(listener, routes_all.into_make_service())
        .await
        .map_err(|e| AppError::Generic {
            description: e.to_string(),
        })?;

    Ok(())
}
