use htmldrop_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    htmldrop_api::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    // Initialize the application (storage, routes)
    let (_state, router) = htmldrop_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    htmldrop_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
