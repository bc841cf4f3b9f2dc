use dotenvy::dotenv;
use tg_upload_relay::helpers::relay_config::RelayConfig;
use tg_upload_relay::route::{ApiDoc, AppState, create_api_router};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

#[tokio::main]
async fn main() {
    dotenv().ok();

    if std::env::args().nth(1).as_deref() == Some("openapi") {
        match ApiDoc::openapi().to_pretty_json() {
            Ok(doc) => println!("{}", doc),
            Err(e) => {
                eprintln!("Failed to render OpenAPI document: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = RelayConfig::from_env()?;

    if !config.bot_token_configured() {
        tracing::warn!("BOTTOKEN is not set; every upload will be answered with 500");
    }
    if !config.chat_id_configured() {
        tracing::warn!("CHATID is not set; Telegram will reject uploads");
    }

    let addr = config.listen_addr;
    let app = create_api_router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
