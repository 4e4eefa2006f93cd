mod app_state;
mod config;
mod models;
mod routes;
pub mod external;
pub use app_state::AppState;
pub use config::Config;

use crate::routes::make_app;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if dotenv().is_err() {
        println!("Starting server without .env file.");
    }
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::init();
    let address = config.bind_address();
    let app = make_app(config)?;
    let listener = TcpListener::bind(&address).await?;
    info!("🚀 Server started successfully on http://{address}");
    axum::serve(listener, app).await?;
    Ok(())
}
