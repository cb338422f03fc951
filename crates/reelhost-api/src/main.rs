use reelhost_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    reelhost_api::telemetry::init_telemetry()?;

    let config = Config::from_env()?;

    // Initialize the application (database, storage, tools, routes)
    let (_state, router) = reelhost_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    reelhost_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
