use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Getters, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct StockReport {
    symbol: String,
    company_profile: Value,
    insider_transactions: Value,
    recommendation_trends: Value,
    earning_surprises: Value,
}
