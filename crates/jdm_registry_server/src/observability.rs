//! Per-request logging wrapper.
//!
//! The entry event is written before the wrapped handler runs and the exit
//! event after it returns, so every request produces exactly one pair.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{info, warn};
use std::time::Instant;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();
    info!("event=http_request module=http status=start method={method} path={path}");

    let response = next.run(request).await;

    let http_status = response.status();
    let duration_ms = started_at.elapsed().as_millis();
    if http_status.is_server_error() {
        warn!(
            "event=http_request module=http status=error method={method} path={path} http_status={} duration_ms={duration_ms}",
            http_status.as_u16()
        );
    } else {
        info!(
            "event=http_request module=http status=ok method={method} path={path} http_status={} duration_ms={duration_ms}",
            http_status.as_u16()
        );
    }
    response
}
