//! Backend entry-point: wires the feedback REST endpoints, health probes,
//! and OpenAPI docs.

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use feedback_backend::inbound::http::health::HealthState;
use feedback_backend::outbound::persistence::{DbPool, PoolConfig};

mod server;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let bind_addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR {bind_addr}: {e}")))?;

    let config = match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::new(PoolConfig::new(url)).await.map_err(|e| {
                std::io::Error::other(format!("database pool construction failed: {e}"))
            })?;
            ServerConfig::new(bind_addr).with_db_pool(pool)
        }
        Err(_) => {
            warn!("DATABASE_URL is not set; storing feedback in process memory");
            ServerConfig::new(bind_addr)
        }
    };

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
