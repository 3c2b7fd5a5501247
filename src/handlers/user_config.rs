// GET/POST /api/user-config handlers

use crate::models::SaveResponse;
use crate::settings::ProviderConfiguration;
use crate::state::ServerState;
use std::convert::Infallible;

pub async fn get_user_config_handler(state: ServerState) -> Result<impl warp::Reply, Infallible> {
    tracing::debug!("GET /api/user-config");

    let config = state.llm_config.read().await.clone();
    Ok(warp::reply::json(&config))
}

pub async fn save_user_config_handler(
    config: ProviderConfiguration,
    state: ServerState,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!(provider = ?config.provider, "POST /api/user-config");

    *state.llm_config.write().await = config;
    Ok(warp::reply::json(&SaveResponse { saved: true }))
}
