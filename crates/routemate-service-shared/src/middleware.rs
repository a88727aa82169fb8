//! HTTP middleware for routemate services.
//!
//! This module provides:
//! - [`RequestId`]: Newtype for correlation ID extraction/generation
//! - [`extract_or_generate_request_id`]: Extract X-Request-ID header or generate UUID v7
//! - [`MetricsLayer`]: Tower middleware for request IDs and HTTP metrics
//!
//! # Request ID Propagation
//!
//! The middleware reuses an incoming `X-Request-ID` header if present,
//! otherwise generates a new UUID v7 (time-sortable). The chosen ID is
//! written back onto the request headers and extensions so handlers see the
//! same value, attached to the request's tracing span, and echoed on the
//! response.
//!
//! # Metrics Recording
//!
//! The `MetricsLayer` records:
//! - `http_requests_total`: Counter by method, path, status bucket
//! - `http_request_duration_seconds`: Histogram by method, path
//! - `http_response_size_bytes`: Histogram by method, path
//!
//! `path` is the matched route template, or `unmatched` for requests that
//! hit no route.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use std::time::Instant;

use axum::extract::{ConnectInfo, MatchedPath};
use axum::http::{HeaderMap, HeaderValue, Request, Response};
use pin_project_lite::pin_project;
use tower::{Layer, Service};
use tracing::{info_span, Span};
use uuid::Uuid;

/// Header carrying the request correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Newtype wrapper for request correlation IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new UUID v7 request ID.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Extract the request ID from headers or generate a new UUID v7.
///
/// An absent, empty, or non-UTF-8 `X-Request-ID` header yields a fresh ID.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate)
}

/// Convert HTTP status code to bucket label.
fn status_bucket(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

// =============================================================================
// MetricsLayer - Tower middleware for request IDs and HTTP metrics
// =============================================================================

/// Tower layer that assigns request IDs and records HTTP metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsLayer;

impl<S> Layer<S> for MetricsLayer {
    type Service = MetricsMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MetricsMiddleware { inner }
    }
}

/// Middleware service produced by [`MetricsLayer`].
#[derive(Debug, Clone)]
pub struct MetricsMiddleware<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for MetricsMiddleware<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: http_body::Body + Send + 'static,
    ResBody: http_body::Body + Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = MetricsFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();

        let method = req.method().to_string();
        let path = route_label(&req);

        let request_id = extract_or_generate_request_id(req.headers());
        let header_value = HeaderValue::from_str(request_id.as_str()).ok();
        if let Some(value) = &header_value {
            req.headers_mut().insert(REQUEST_ID_HEADER, value.clone());
        }
        req.extensions_mut().insert(request_id.clone());

        let remote_addr = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string());

        let span = info_span!(
            "request",
            request_id = %request_id,
            method = %method,
            path = %path,
            remote_addr = remote_addr.as_deref().unwrap_or("-"),
        );

        {
            let _enter = span.enter();
            tracing::debug!("handling request");
        }

        MetricsFuture {
            inner: self.inner.call(req),
            start,
            method,
            path,
            header_value,
            span,
        }
    }
}

/// Label used for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

// Route templates only; raw 404 paths would give unbounded label values.
fn route_label<B>(req: &Request<B>) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

pin_project! {
    /// Future wrapper that records metrics and echoes the request ID.
    pub struct MetricsFuture<F> {
        #[pin]
        inner: F,
        start: Instant,
        method: String,
        path: String,
        header_value: Option<HeaderValue>,
        span: Span,
    }
}

impl<F, ResBody, E> Future for MetricsFuture<F>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
    ResBody: http_body::Body,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _enter = this.span.enter();

        let mut result = ready!(this.inner.poll(cx));

        let duration_secs = this.start.elapsed().as_secs_f64();
        let latency_ms = duration_secs * 1000.0;

        metrics::histogram!(
            "http_request_duration_seconds",
            "method" => this.method.clone(),
            "path" => this.path.clone()
        )
        .record(duration_secs);

        match &mut result {
            Ok(response) => {
                let status = response.status().as_u16();

                metrics::counter!(
                    "http_requests_total",
                    "method" => this.method.clone(),
                    "path" => this.path.clone(),
                    "status" => status_bucket(status)
                )
                .increment(1);

                if let Some(size) = response.body().size_hint().exact() {
                    metrics::histogram!(
                        "http_response_size_bytes",
                        "method" => this.method.clone(),
                        "path" => this.path.clone()
                    )
                    .record(size as f64);
                }

                if let Some(value) = this.header_value.take() {
                    response.headers_mut().insert(REQUEST_ID_HEADER, value);
                }

                tracing::info!(status, latency_ms, "request completed");
            }
            Err(_) => {
                metrics::counter!(
                    "http_requests_total",
                    "method" => this.method.clone(),
                    "path" => this.path.clone(),
                    "status" => "5xx"
                )
                .increment(1);

                tracing::error!(latency_ms, "request failed");
            }
        }

        Poll::Ready(result)
    }
}
