/// User service entry point
///
/// Initializes configuration from the environment and starts the HTTP server.

use user_service::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - User API at /api/users and /api/users/{id}
/// - Health check at /health
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:8000 and sqlite://data/users.db)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
