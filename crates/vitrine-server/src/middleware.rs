//! Request plumbing shared by every route, plus the per-business save limiter.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Path, Request, State},
    http::{HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tag the request with the caller's `x-request-id` (or a fresh `UUIDv4`),
/// run it inside a span carrying that id, and echo the id on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned);

    let span = tracing::info_span!(
        "request",
        request_id = %id,
        method = %req.method(),
        path = %req.uri().path(),
    );
    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}

#[derive(Debug, Clone, Copy)]
struct SaveWindow {
    started_at: Instant,
    saves: usize,
}

/// Fixed-window cap on page config saves, counted separately per business.
///
/// Only `PUT …/page-config` is counted; reads, previews and the stateless
/// edit endpoint pass through.
#[derive(Debug, Clone)]
pub struct SaveLimiter {
    max_saves: usize,
    window: Duration,
    windows: Arc<Mutex<HashMap<i64, SaveWindow>>>,
}

impl SaveLimiter {
    #[must_use]
    pub fn new(max_saves: usize, window: Duration) -> Self {
        Self {
            max_saves,
            window,
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn per_minute(max_saves: usize) -> Self {
        Self::new(max_saves, Duration::from_secs(60))
    }

    /// Count one save for `business_id` at `now`. `false` once that business
    /// has used up its window.
    async fn try_acquire(&self, business_id: i64, now: Instant) -> bool {
        let mut windows = self.windows.lock().await;
        windows.retain(|_, w| now.saturating_duration_since(w.started_at) < self.window);

        let window = windows.entry(business_id).or_insert(SaveWindow {
            started_at: now,
            saves: 0,
        });
        if window.saves >= self.max_saves {
            return false;
        }
        window.saves += 1;
        true
    }
}

/// Route layer for `/api/v1/businesses/{business_id}/page-config`.
pub async fn limit_saves(
    State(limiter): State<SaveLimiter>,
    Path(business_id): Path<i64>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() != Method::PUT || limiter.try_acquire(business_id, Instant::now()).await {
        return next.run(req).await;
    }

    tracing::warn!(business_id, "page config save limit reached");
    let rid = req
        .extensions()
        .get::<RequestId>()
        .map_or_else(String::new, |r| r.0.clone());
    ApiError::new(
        rid,
        "rate_limited",
        format!("too many saves for business {business_id}; retry in a minute"),
    )
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saves_are_counted_per_business() {
        let limiter = SaveLimiter::per_minute(1);
        let now = Instant::now();

        assert!(limiter.try_acquire(1, now).await);
        assert!(!limiter.try_acquire(1, now).await);
        assert!(limiter.try_acquire(2, now).await);
    }

    #[tokio::test]
    async fn window_resets_after_it_elapses() {
        let limiter = SaveLimiter::new(2, Duration::from_secs(60));
        let start = Instant::now();

        assert!(limiter.try_acquire(7, start).await);
        assert!(limiter.try_acquire(7, start).await);
        assert!(!limiter.try_acquire(7, start + Duration::from_secs(59)).await);
        assert!(limiter.try_acquire(7, start + Duration::from_secs(60)).await);
    }

    #[tokio::test]
    async fn expired_windows_are_dropped() {
        let limiter = SaveLimiter::new(1, Duration::from_secs(1));
        let start = Instant::now();
        limiter.try_acquire(1, start).await;
        limiter.try_acquire(2, start).await;

        limiter.try_acquire(3, start + Duration::from_secs(5)).await;

        let windows = limiter.windows.lock().await;
        assert_eq!(windows.len(), 1);
        assert!(windows.contains_key(&3));
    }
}
