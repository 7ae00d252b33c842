use std::sync::Arc;

use ks_api_rest::{
    context::{ApiRestCtx, ApiRestDaoCtx},
    ApiRestServer,
};
use ks_dao::Db;
use tokio_util::sync::CancellationToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = ks_config::from_path(&config_path);

    ks_log::init(config.log().display_level(), config.log().level_filter());

    ks_log::info(
        Some("🚀"),
        format!("[Keyset] Starting in {:?} mode", config.app().mode()),
    );

    let db = Arc::new(Db::new());

    let api_rest_server = ApiRestServer::new(
        config.api().rest().host(),
        config.api().rest().port(),
        ApiRestCtx::new(ApiRestDaoCtx::new(db), *config.pagination()),
    );

    let cancel_token = CancellationToken::new();

    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ks_log::warn(None, "[Keyset] Received shutdown signal");
            shutdown_token.cancel();
        }
    });

    match api_rest_server.run(cancel_token.clone()).await {
        Ok(_) => ks_log::info(Some("👋"), "[Keyset] Turned off"),
        Err(err) => {
            cancel_token.cancel();
            ks_log::warn(Some("👋"), format!("[Keyset] Turned off with error: {err}"));
        }
    }
}
