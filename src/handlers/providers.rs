// GET /api/providers handler

use crate::models::ProviderInfo;
use crate::settings::selectable_providers;
use crate::state::ServerState;
use std::convert::Infallible;

pub async fn list_providers_handler(state: ServerState) -> Result<impl warp::Reply, Infallible> {
    let providers: Vec<ProviderInfo> = selectable_providers(&state.validator)
        .iter()
        .map(ProviderInfo::from)
        .collect();

    Ok(warp::reply::json(&providers))
}
