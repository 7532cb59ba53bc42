use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Logs status code and handling time of every request.
pub async fn request_info(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
    tracing::info!(
        %method,
        %path,
        status_code = response.status().as_u16(),
        duration_ns,
        "request handled"
    );
    response
}
