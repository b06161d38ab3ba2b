use crate::client::HttpProjectSource;
use crate::error::CliError;
use tracing::info;

/// Check that the generator server is reachable
pub async fn check_server_status(server: Option<String>) -> Result<(), CliError> {
    let source = HttpProjectSource::new(server)?;
    info!("Checking server status at {}", source.server_url());

    let health = source.health().await?;
    println!(
        "Server {} is {} (version {})",
        source.server_url(),
        health.status,
        health.version
    );
    Ok(())
}
