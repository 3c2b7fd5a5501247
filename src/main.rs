use llm_settings::config::AppConfig;
use llm_settings::logging;
use llm_settings::routes::configure_routes;
use llm_settings::state::ServerState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    logging::init()?;

    let config = AppConfig::from_env()?;
    let state = ServerState::new(config.can_change_keys, config.validator());
    let routes = configure_routes(state);

    tracing::info!(
        can_change_keys = config.can_change_keys,
        "Starting server on http://{}",
        config.bind_addr
    );
    warp::serve(routes).run(config.bind_addr).await;

    Ok(())
}
