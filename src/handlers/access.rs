// GET /api/can-change-keys handler

use crate::models::AccessResponse;
use crate::state::ServerState;
use std::convert::Infallible;

pub async fn can_change_keys_handler(state: ServerState) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&AccessResponse {
        can_change_keys: state.can_change_keys,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::configure_routes;
    use crate::settings::Validator;
    use warp::http::StatusCode;

    #[tokio::test]
    async fn test_reports_access_flag() {
        let state = ServerState::new(false, Validator::default());
        let response = warp::test::request()
            .method("GET")
            .path("/api/can-change-keys")
            .reply(&configure_routes(state))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_ref(), b"{\"can_change_keys\":false}");
    }
}
