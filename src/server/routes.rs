use anyhow::Result;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use derive_new::new;
use reqwest::Client;
use serde::Deserialize;
use sqlx::{Connection, PgConnection};
use tracing::{info, warn};

use crate::api::finnhub;
use crate::db::{init, write};
use crate::models::StockReport;
use crate::server::AppState;
use crate::server::error::ApiError;

const DEFAULT_SYMBOL: &str = "INFY";

#[derive(Debug, Deserialize, new)]
pub struct ReportParams {
    symbol: Option<String>,
}

pub fn stock_routes() -> Router<AppState> {
    Router::new().route(
        "/api/stock-report",
        get(get_stock_report).post(get_stock_report),
    )
}

pub fn resolve_symbol(params: &ReportParams) -> String {
    params
        .symbol
        .as_deref()
        .filter(|symbol| !symbol.is_empty())
        .unwrap_or(DEFAULT_SYMBOL)
        .to_string()
}

async fn get_stock_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<StockReport>, ApiError> {
    let symbol = resolve_symbol(&params);
    info!(%symbol, "processing stock report request");

    let mut conn = PgConnection::connect(state.config.database_url()).await?;
    let report = run_pipeline(
        &state.client,
        state.config.finnhub_api_key(),
        &mut conn,
        &symbol,
    )
    .await;

    if let Err(err) = conn.close().await {
        warn!("failed to close database connection: {err:#}");
    }

    Ok(Json(report?))
}

async fn run_pipeline(
    client: &Client,
    api_key: &str,
    conn: &mut PgConnection,
    symbol: &str,
) -> Result<StockReport> {
    init::ensure_schema(conn).await?;

    let company_profile = finnhub::get_company_profile(symbol, client, api_key).await?;
    if let Some((sql, params)) = write::build_profile_insert(symbol, &company_profile) {
        write::execute_insert(conn, &sql, &params).await?;
    }

    let insider_transactions = finnhub::get_insider_transactions(symbol, client, api_key).await?;
    let insert = insider_transactions
        .get("data")
        .and_then(|data| write::build_bulk_insert(write::INSIDER_TABLE, write::INSIDER_COLUMNS, data));
    if let Some((sql, params)) = insert {
        write::execute_insert(conn, &sql, &params).await?;
    }

    let recommendation_trends = finnhub::get_recommendation_trends(symbol, client, api_key).await?;
    if let Some((sql, params)) = write::build_bulk_insert(
        write::RECOMMEND_TABLE,
        write::RECOMMEND_COLUMNS,
        &recommendation_trends,
    ) {
        write::execute_insert(conn, &sql, &params).await?;
    }

    let earning_surprises = finnhub::get_earnings_surprises(symbol, client, api_key).await?;
    if let Some((sql, params)) = write::build_bulk_insert(
        write::EARNINGS_TABLE,
        write::EARNINGS_COLUMNS,
        &earning_surprises,
    ) {
        write::execute_insert(conn, &sql, &params).await?;
    }

    Ok(StockReport::new(
        symbol.to_string(),
        company_profile,
        insider_transactions,
        recommendation_trends,
        earning_surprises,
    ))
}
