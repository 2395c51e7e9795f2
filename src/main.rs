use booking_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first: .env, then logging
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("Booking server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let state = ServerState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
