// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod routes;

#[cfg(test)]
mod tests;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use clap::Parser;
use hr_admin_persistence::Persistence;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::error::ServerError;
use crate::routes::{AppState, build_router};

/// HR Admin Server - HTTP server for the HR & fleet administration service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "HR_ADMIN_DATABASE")]
    database: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(long, env = "HR_ADMIN_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, env = "HR_ADMIN_PORT", default_value_t = 3000)]
    port: u16,
}

/// Resolves once Ctrl-C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing HR Admin Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!(path = %db_path.display(), "Using file-based database");
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let store: Arc<Mutex<Persistence>> = Arc::new(Mutex::new(persistence));
    let app: Router = build_router(AppState {
        persistence: Arc::clone(&store),
    });

    let addr: SocketAddr = SocketAddr::new(args.host, args.port);
    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match Arc::try_unwrap(store) {
        Ok(mutex) => mutex.into_inner().close(),
        Err(_) => warn!("Store still referenced at shutdown; it will close on drop"),
    }

    info!("Server stopped");
    Ok(())
}
