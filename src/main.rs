//! Rate Resolver service entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌───────────┐    ┌────────────┐
//! │  Config  │───▶│ Postgres │───▶│ Services  │───▶│  Gateway   │
//! │  (YAML)  │    │  (sqlx)  │    │(resolver) │    │  (axum)    │
//! └──────────┘    └──────────┘    └───────────┘    └────────────┘
//! ```

use std::sync::Arc;

use rate_resolver::config::AppConfig;
use rate_resolver::db::Database;
use rate_resolver::gateway::{self, state::AppState};
use rate_resolver::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    }
    let _log_guard = init_logging(&config);

    tracing::info!("Starting rate-resolver in {} mode", env);

    let db = Arc::new(Database::connect(&config.postgres_url).await?);
    db.init_schema().await?;
    tracing::info!("Database schema ready");

    let state = Arc::new(AppState::new(db, config.expire_in_minutes));

    gateway::run_server(&config.gateway, state).await
}
