//! HTTP request metrics middleware

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

/// Label for requests that matched no route
const UNMATCHED_PATH: &str = "unmatched";

/// Records `http_requests_total{method,path,status}` and
/// `http_request_duration_seconds{method,path}`. `path` is the route
/// template (`/api/v1/routes/{id}`), never the concrete URI.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    metrics::histogram!("http_request_duration_seconds", "method" => method, "path" => path)
        .record(duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Router};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    #[test]
    fn records_route_template_not_uri() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                let app = Router::new()
                    .route("/routes/{id}", get(|| async { "ok" }))
                    .layer(middleware::from_fn(http_metrics_middleware));

                for uri in ["/routes/r-1", "/routes/r-2", "/nope"] {
                    app.clone()
                        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                        .await
                        .unwrap();
                }
            })
        });

        let text = handle.render();
        assert!(text.contains(r#"path="/routes/{id}",status="200"} 2"#));
        assert!(text.contains(r#"path="unmatched",status="404"} 1"#));
        assert!(!text.contains("r-1"));
    }
}
