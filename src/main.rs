use std::sync::Arc;

use cabfare::config::Config;
use cabfare::db::PgStore;
use cabfare::engine::Engine;
use cabfare::external::google_maps::GoogleMaps;
use cabfare::server::serve;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = Arc::new(PgStore::new(&config.database_url, config.max_connections).await?);
    let google_maps = GoogleMaps::new(
        config.google_maps_api_base.clone(),
        config.google_maps_api_key.clone(),
    );

    let engine = Engine::new(store.clone(), store, Arc::new(google_maps));

    serve(engine, config.listen_addr).await
}
