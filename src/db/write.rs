use chrono::NaiveDate;
use serde_json::Value;
use sqlx::PgConnection;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnKind {
    Int,
    Numeric,
    Date,
    Text,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SqlParam {
    Int(Option<i64>),
    Numeric(Option<f64>),
    Date(Option<NaiveDate>),
    Text(Option<String>),
}

pub const INSIDER_TABLE: &str = "insider_transactions";
pub const INSIDER_COLUMNS: &[(&str, ColumnKind)] = &[
    ("change", ColumnKind::Int),
    ("currency", ColumnKind::Text),
    ("filingDate", ColumnKind::Date),
    ("name", ColumnKind::Text),
    ("share", ColumnKind::Int),
    ("symbol", ColumnKind::Text),
    ("transactionDate", ColumnKind::Date),
    ("transactionPrice", ColumnKind::Numeric),
];

pub const RECOMMEND_TABLE: &str = "recommend_data";
pub const RECOMMEND_COLUMNS: &[(&str, ColumnKind)] = &[
    ("buy", ColumnKind::Int),
    ("hold", ColumnKind::Int),
    ("period", ColumnKind::Date),
    ("sell", ColumnKind::Int),
    ("strongBuy", ColumnKind::Int),
    ("strongSell", ColumnKind::Int),
    ("symbol", ColumnKind::Text),
];

pub const EARNINGS_TABLE: &str = "earn_surprise";
pub const EARNINGS_COLUMNS: &[(&str, ColumnKind)] = &[
    ("actual", ColumnKind::Numeric),
    ("estimate", ColumnKind::Numeric),
    ("period", ColumnKind::Date),
    ("quarter", ColumnKind::Int),
    ("surprise", ColumnKind::Numeric),
    ("surprisePercent", ColumnKind::Numeric),
    ("symbol", ColumnKind::Text),
    ("year", ColumnKind::Int),
];

const PROFILE_INSERT: &str = r#"
    INSERT INTO company_profile
        (symbol, country, currency, estimateCurrency, exchange, finnhubIndustry,
         ipo, logo, marketCapitalization, name, phone, shareOutstanding, ticker, weburl)
    VALUES
        ($1, $2, $3, $4, $5, $6,
         TO_DATE($7, 'YYYY-MM-DD'), $8, $9, $10, $11, $12, $13, $14)
    RETURNING id
"#;

pub fn build_profile_insert(symbol: &str, profile: &Value) -> Option<(String, Vec<SqlParam>)> {
    match profile.get("ipo") {
        Some(ipo) if !ipo.is_null() => {}
        _ => return None,
    }

    let field = |name: &str, kind: ColumnKind| to_param(kind, profile.get(name));

    let params = vec![
        SqlParam::Text(Some(symbol.to_string())),
        field("country", ColumnKind::Text),
        field("currency", ColumnKind::Text),
        field("estimateCurrency", ColumnKind::Text),
        field("exchange", ColumnKind::Text),
        field("finnhubIndustry", ColumnKind::Text),
        field("ipo", ColumnKind::Text),
        field("logo", ColumnKind::Text),
        field("marketCapitalization", ColumnKind::Numeric),
        field("name", ColumnKind::Text),
        field("phone", ColumnKind::Text),
        field("shareOutstanding", ColumnKind::Numeric),
        field("ticker", ColumnKind::Text),
        field("weburl", ColumnKind::Text),
    ];

    Some((PROFILE_INSERT.to_string(), params))
}

pub fn build_bulk_insert(
    table: &str,
    columns: &[(&str, ColumnKind)],
    data: &Value,
) -> Option<(String, Vec<SqlParam>)> {
    let rows = data.as_array()?;
    if rows.is_empty() {
        return None;
    }

    let mut value_rows = Vec::with_capacity(rows.len());
    let mut params = Vec::with_capacity(rows.len() * columns.len());
    let mut i = 1;

    for row in rows {
        let mut placeholders = Vec::with_capacity(columns.len());
        for (name, kind) in columns {
            placeholders.push(format!("${}", i));
            i += 1;
            params.push(to_param(*kind, row.get(name)));
        }
        value_rows.push(format!("({})", placeholders.join(",")));
    }

    let column_names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES {} RETURNING id",
        table,
        column_names.join(", "),
        value_rows.join(", ")
    );

    Some((sql, params))
}

pub async fn execute_insert(
    conn: &mut PgConnection,
    sql: &str,
    params: &[SqlParam],
) -> Result<(), sqlx::Error> {
    let mut query = sqlx::query(sql);
    for param in params {
        query = match param {
            SqlParam::Int(value) => query.bind(*value),
            SqlParam::Numeric(value) => query.bind(*value),
            SqlParam::Date(value) => query.bind(*value),
            SqlParam::Text(value) => query.bind(value.as_deref()),
        };
    }
    query.execute(conn).await?;
    Ok(())
}

fn to_param(kind: ColumnKind, value: Option<&Value>) -> SqlParam {
    let value = value.filter(|v| !v.is_null());
    match kind {
        ColumnKind::Int => SqlParam::Int(value.and_then(Value::as_i64)),
        ColumnKind::Numeric => SqlParam::Numeric(value.and_then(Value::as_f64)),
        ColumnKind::Date => SqlParam::Date(
            value
                .and_then(Value::as_str)
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
        ),
        ColumnKind::Text => {
            SqlParam::Text(value.and_then(Value::as_str).map(|s| s.to_string()))
        }
    }
}
