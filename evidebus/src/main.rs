use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use evidebus::config::{Cli, Command, ServeArgs, SitemapArgs};
use evidebus::gazetteer::Gazetteer;
use evidebus::sitemap::{
    enumerate_urls, popular_routes, render_sitemap, static_pages, write_sitemap,
};
use evidebus::web::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("evidebus=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Sitemap(args) => generate_sitemap(&args),
    }
}

/// Write the sitemap for the compiled-in catalogs.
fn generate_sitemap(args: &SitemapArgs) -> anyhow::Result<()> {
    let gazetteer = Gazetteer::builtin();
    let pages = static_pages();
    let routes = popular_routes();

    let entries = enumerate_urls(&args.site.sitemap_config(), &pages, &gazetteer, &routes);
    let lastmod = args.lastmod.unwrap_or_else(|| Local::now().date_naive());
    let xml = render_sitemap(&entries, lastmod)?;
    write_sitemap(&args.out, &xml)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    info!(
        pages = pages.len(),
        stops = gazetteer.len(),
        routes = routes.len(),
        total = entries.len(),
        "sitemap generated"
    );
    Ok(())
}

/// Serve the JSON API until interrupted.
async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let state = AppState::builtin(args.site.sitemap_config())?;
    info!(
        stops = state.gazetteer.len(),
        depots = state.depots.depot_count(),
        "loaded reference data"
    );

    let app = create_router(state, &args.static_dir);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!(addr = %args.bind, "evidebus listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
