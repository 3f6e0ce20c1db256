use anyhow::Context;
use app_context::RequestContext;
use clap::Parser;
use locations::http::LocationsHttpHandler;

mod app_context;
mod auth;
mod cli;
mod geo;
mod health;
mod http;
mod locations;
mod logging;
mod storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init(&args);
    tracing::info!("Initialized logging.");
    auth::init(&args)?;
    tracing::info!("Initialized auth.");

    let app_context = app_context::init(&args);
    if let Some(path) = &args.locations {
        let seed = locations::seed::read(path)?;
        let report = LocationsHttpHandler::new(app_context.clone(), &RequestContext::system())
            .import(seed)
            .await;
        tracing::info!(
            added = report.added,
            skipped = report.skipped,
            failed = report.errors.len(),
            "Seeded locations from {}.",
            path.display(),
        );
        for error in &report.errors {
            tracing::warn!("{error}");
        }
    }

    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}.", args.listen_address))?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .context("HTTP server stopped unexpectedly.")
}
