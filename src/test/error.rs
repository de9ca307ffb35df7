#[cfg(test)]
mod tests {
    use anyhow::{Context, anyhow};
    use axum::http::{StatusCode, header};
    use axum::response::IntoResponse;
    use serde_json::Value;

    use crate::server::error::ApiError;

    #[tokio::test]
    async fn failure_response_has_fixed_shape() {
        let response = ApiError::from(anyhow!("boom")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "Failed to fetch data or connect to DB");
        assert_eq!(body["details"], "boom");
    }

    #[tokio::test]
    async fn fetch_error_details_keep_the_endpoint_prefix() {
        let err = Err::<(), _>(anyhow!("Request failed: 404 Not Found"))
            .context("Failed to fetch stock/recommendation")
            .unwrap_err();

        let response = ApiError::from(err).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body["details"],
            "Failed to fetch stock/recommendation: Request failed: 404 Not Found"
        );
    }
}
