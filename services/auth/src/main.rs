use std::time::Duration;

use anyhow::Context;
use tracing::info;

use stepauth_auth::config::AuthConfig;
use stepauth_auth::infra::reaper::spawn_session_reaper;
use stepauth_auth::router::build_router;
use stepauth_auth::state::AppState;
use stepauth_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = AuthConfig::from_env().context("invalid auth service configuration")?;

    let state = AppState::new(config.jwt_secret, config.cookie_secure);

    if config.session_reaper_interval_secs > 0 {
        spawn_session_reaper(
            state.session_store(),
            state.clock(),
            Duration::from_secs(config.session_reaper_interval_secs),
        );
        info!(
            interval_secs = config.session_reaper_interval_secs,
            "expired session reaper enabled"
        );
    }

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
