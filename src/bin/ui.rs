use std::{net::SocketAddr, path::PathBuf, process::ExitCode};

use axum::middleware;
use axum_server::Handle;
use clap::Parser;

use finance_portal::{
    add_tracing_layer,
    client::{HttpTransactionApi, TransactionsView, build_ui_router},
    get_local_date, graceful_shutdown, logging_middleware, setup_logging,
};

/// The client UI for finance_portal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the REST API server.
    #[arg(long, env = "FINANCE_PORTAL_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// The port to serve the UI from.
    #[arg(short, long, default_value_t = 4200)]
    port: u16,

    /// The canonical timezone used to date new transactions, e.g. "Pacific/Auckland".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// File path to the debug log.
    #[arg(long, default_value = "ui-debug.log")]
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

    let Some(today) = get_local_date(&args.timezone) else {
        tracing::error!("Unknown timezone \"{}\"", args.timezone);
        return ExitCode::FAILURE;
    };

    let api = HttpTransactionApi::new(&args.api_url);
    let view = TransactionsView::new(api, today);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router =
        build_ui_router(view, &args.timezone).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("UI listening on {addr}, using the API at {}", args.api_url);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Could not serve the UI on {addr}: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
