use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use recall_server::config::ServerConfig;
use recall_server::game::{Game, GameConfig};
use recall_server::network::MapGeometry;
use recall_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recall_server=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let game = Game::mtr(GameConfig::default());
    info!(
        stations = game.tracker().total(),
        aliases = game.resolver().len(),
        "game ready"
    );

    let state = AppState::new(game, MapGeometry::mtr());
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("MTR Recall listening on http://{}", config.addr);
    info!("  GET  /              - Game page");
    info!("  GET  /map           - Map fragment");
    info!("  GET  /api/progress  - Current progress");
    info!("  POST /api/guess     - Submit input text");
    info!("  POST /api/reset     - Reset progress");

    axum::serve(listener, app).await?;
    Ok(())
}
