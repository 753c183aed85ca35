use employee_server::{Config, Server, ServerState, logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Environment first: .env values feed Config::from_env
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logger::init(&config);

    tracing::info!("Employee API server starting...");

    let state = ServerState::initialize(&config).await?;
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
