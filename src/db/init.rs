use sqlx::PgConnection;
use sqlx::postgres::PgQueryResult;

pub async fn ensure_schema(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    create_company_profile(conn).await?;
    create_insider_transactions(conn).await?;
    create_recommend_data(conn).await?;
    create_earn_surprise(conn).await?;
    Ok(())
}

pub async fn create_company_profile(
    conn: &mut PgConnection,
) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS company_profile (
            id SERIAL PRIMARY KEY,
            symbol TEXT,
            country TEXT,
            currency TEXT,
            estimateCurrency TEXT,
            exchange TEXT,
            finnhubIndustry TEXT,
            ipo DATE,
            logo TEXT,
            marketCapitalization NUMERIC,
            name TEXT,
            phone TEXT,
            shareOutstanding NUMERIC,
            ticker TEXT,
            weburl TEXT,
            created_at TIMESTAMP DEFAULT NOW()
        )
        "#,
    )
    .execute(conn)
    .await
}

pub async fn create_insider_transactions(
    conn: &mut PgConnection,
) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS insider_transactions (
            id SERIAL PRIMARY KEY,
            change INT,
            currency TEXT,
            filingDate DATE,
            name TEXT,
            share INT,
            symbol TEXT,
            transactionDate DATE,
            transactionPrice NUMERIC
        )
        "#,
    )
    .execute(conn)
    .await
}

pub async fn create_recommend_data(
    conn: &mut PgConnection,
) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recommend_data (
            id SERIAL PRIMARY KEY,
            buy INT,
            hold INT,
            period DATE,
            sell INT,
            strongBuy INT,
            strongSell INT,
            symbol TEXT
        )
        "#,
    )
    .execute(conn)
    .await
}

pub async fn create_earn_surprise(conn: &mut PgConnection) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS earn_surprise (
            id SERIAL PRIMARY KEY,
            actual NUMERIC,
            estimate NUMERIC,
            period DATE,
            quarter INT,
            surprise NUMERIC,
            surprisePercent NUMERIC,
            symbol TEXT,
            year INT
        )
        "#,
    )
    .execute(conn)
    .await
}
