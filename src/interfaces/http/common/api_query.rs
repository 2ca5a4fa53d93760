//! Query-string extractor whose rejection uses the error envelope

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResponse};
use crate::domain::ErrorCode;

/// `Query<T>` that reports undecodable parameters as 400 `invalid-argument`.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let body = ApiResponse::<()>::error(
                    ErrorCode::InvalidArgument,
                    format!("Invalid query: {}", rejection.body_text()),
                );
                (StatusCode::BAD_REQUEST, Json(body))
            })?;

        Ok(ApiQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Paging {
        #[serde(default)]
        page: u32,
    }

    async fn handler(ApiQuery(p): ApiQuery<Paging>) -> String {
        p.page.to_string()
    }

    async fn get_uri(uri: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/items", get(handler));
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn decodes_parameters() {
        let (status, body) = get_uri("/items?page=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"3");
    }

    #[tokio::test]
    async fn undecodable_parameters_use_envelope() {
        let (status, body) = get_uri("/items?page=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "invalid-argument");
        assert!(json["error"].as_str().unwrap().starts_with("Invalid query"));
    }
}
