use std::net::SocketAddr;
use std::sync::Arc;

use axum::{serve, Extension};
use dotenvy::dotenv;
use report_results::{
    api,
    infrastructure::{
        config::Config, query::QueryDocument, state::AppState, upstream::HttpReportGateway,
        views::Views,
    },
    telemetry,
};
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    };
    telemetry::init();

    let query = QueryDocument::load(&config.query_file).await?;
    info!(path = %config.query_file, "query document loaded");
    let views = Arc::new(Views::load(&config.templates_dir)?);
    let gateway = Arc::new(HttpReportGateway::from_config(&config));
    info!(endpoint = %gateway.endpoint(), "upstream report gateway configured");
    let state = Arc::new(AppState::new(Arc::clone(&config), query, gateway, views));

    let router = api::build_router().layer(Extension(Arc::clone(&state)));

    let addr: SocketAddr = config.bind_address().parse()?;
    info!(%addr, "starting report results front end");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server = serve(listener, router.into_make_service());

    tokio::select! {
        res = server => {
            if let Err(err) = res {
                warn!(error = ?err, "server exited with error");
            }
        }
        _ = shutdown_signal() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
