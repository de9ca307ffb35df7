use anyhow::{Context, Error, Result};
use reqwest::Client;
use serde_json::Value;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
    api_key: &str,
) -> Result<Value> {
    send_request(client, base_url, endpoint, params, api_key)
        .await
        .with_context(|| format!("Failed to fetch {}", endpoint))
}

async fn send_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
    api_key: &str,
) -> Result<Value> {
    let url = format!("{}/{}?{}&token={}", base_url, endpoint, params, api_key);
    let res = client.get(&url).send().await?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    if text.trim().is_empty() {
        return Err(Error::msg("Empty API response"));
    }

    let data = serde_json::from_str::<Value>(&text)?;
    if data.is_null() {
        return Err(Error::msg("Empty API response"));
    }

    Ok(data)
}
