// Route definitions

use std::convert::Infallible;

use crate::handlers;
use crate::state::ServerState;
use warp::Filter;

pub fn configure_routes(
    state: ServerState,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let api = warp::path("api");

    // GET /api/user-config
    let get_user_config = api
        .and(warp::path("user-config"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::get_user_config_handler);

    // POST /api/user-config
    let save_user_config = api
        .and(warp::path("user-config"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(handlers::save_user_config_handler);

    // GET /api/can-change-keys
    let can_change_keys = api
        .and(warp::path("can-change-keys"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::can_change_keys_handler);

    // GET /api/providers
    let providers = api
        .and(warp::path("providers"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state))
        .and_then(handlers::list_providers_handler);

    // Combine routes
    get_user_config
        .or(save_user_config)
        .or(can_change_keys)
        .or(providers)
}

fn with_state(
    state: ServerState,
) -> impl Filter<Extract = (ServerState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
