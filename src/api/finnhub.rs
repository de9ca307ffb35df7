use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::api::utils::make_request;

const BASE_URL: &str = "https://finnhub.io/api/v1";

pub async fn get_company_profile(symbol: &str, client: &Client, api_key: &str) -> Result<Value> {
    let params = format!("symbol={}", symbol);
    make_request(client, BASE_URL, "stock/profile2", &params, api_key).await
}

pub async fn get_insider_transactions(
    symbol: &str,
    client: &Client,
    api_key: &str,
) -> Result<Value> {
    let params = format!("symbol={}", symbol);
    make_request(client, BASE_URL, "stock/insider-transactions", &params, api_key).await
}

pub async fn get_recommendation_trends(
    symbol: &str,
    client: &Client,
    api_key: &str,
) -> Result<Value> {
    let params = format!("symbol={}", symbol);
    make_request(client, BASE_URL, "stock/recommendation", &params, api_key).await
}

pub async fn get_earnings_surprises(
    symbol: &str,
    client: &Client,
    api_key: &str,
) -> Result<Value> {
    let params = format!("symbol={}&limit=4", symbol);
    make_request(client, BASE_URL, "stock/earnings", &params, api_key).await
}
