//! OpenSASE Storefront - order totals and catalog grid service

use anyhow::Result;
use opensase_storefront::{config::AppConfig, http, InMemoryShopDirectory};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();

    let shops = match &config.shops_file {
        Some(path) => InMemoryShopDirectory::from_json_file(path)?,
        None => InMemoryShopDirectory::default(),
    };
    if shops.is_empty() {
        tracing::warn!("no shops loaded, shop summaries will reject every shop");
    } else {
        tracing::info!(shops = shops.len(), "shop directory ready");
    }
    let app = http::router(http::AppState { shops: Arc::new(shops) });

    let addr = config.socket_addr();
    tracing::info!("OpenSASE Storefront listening on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
