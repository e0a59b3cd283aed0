use std::{net::SocketAddr, path::PathBuf, process::ExitCode};

use axum::middleware;
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;

use finance_portal::{
    AppState, add_tracing_layer, build_router, cors_layer, graceful_shutdown, logging_middleware,
    setup_logging,
};

/// The REST API server for finance_portal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite document store.
    #[arg(long, env = "FINANCE_PORTAL_DB_PATH")]
    db_path: PathBuf,

    /// The origin that may call the API from a browser, e.g. "http://localhost:4200".
    #[arg(long, env = "FINANCE_PORTAL_ALLOWED_ORIGIN")]
    allowed_origin: String,

    /// The port to serve the API from.
    #[arg(short, long, env = "FINANCE_PORTAL_PORT", default_value_t = 8080)]
    port: u16,

    /// File path to the debug log.
    #[arg(long, default_value = "debug.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args.log_path) {
        eprintln!(
            "Could not open the log file {}: {error}",
            args.log_path.display()
        );
        return ExitCode::FAILURE;
    }

    let cors = match cors_layer(&args.allowed_origin) {
        Ok(cors) => cors,
        Err(error) => {
            tracing::error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let state = match Connection::open(&args.db_path)
        .map_err(finance_portal::Error::from)
        .and_then(AppState::new)
    {
        Ok(state) => state,
        Err(error) => {
            tracing::error!(
                "Could not open the document store at {}: {error}",
                args.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors);
    let router = add_tracing_layer(router);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("HTTP server listening on {}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Could not serve the API on {addr}: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
