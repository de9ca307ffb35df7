pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::extract::Query;
use axum::routing::get;
use axum::Router;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub config: Arc<Config>,
}

pub fn build_router(config: Config) -> Router {
    let state = AppState {
        client: Client::new(),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(hello))
        .merge(routes::stock_routes())
        .with_state(state)
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let addr = config.bind_addr().clone();
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, Deserialize)]
struct HelloParams {
    name: Option<String>,
}

async fn hello(Query(params): Query<HelloParams>) -> String {
    format!("Hello, {}!", params.name.as_deref().unwrap_or("world"))
}
