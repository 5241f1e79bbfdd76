//! Request identity plumbing.
//!
//! # Responsibilities
//! - Tag every request with a unique `x-request-id` (UUID v4)
//! - Echo the ID on the response so callers can quote it
//!
//! # Design Decisions
//! - The ID is added as early as possible so every log line carries it
//! - A client-supplied `x-request-id` is kept, not replaced

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that tags every request and response with an `x-request-id`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service produced by [`RequestIdLayer`].
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, ResBody> Service<Request<Body>> for RequestIdService<S>
where
    S: Service<Request<Body>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let id = match req.headers().get(X_REQUEST_ID) {
            Some(existing) => existing.clone(),
            None => {
                let generated = new_request_id();
                req.headers_mut().insert(X_REQUEST_ID, generated.clone());
                generated
            }
        };

        let future = self.inner.call(req);
        Box::pin(async move {
            let mut response = future.await?;
            response.headers_mut().entry(X_REQUEST_ID).or_insert(id);
            Ok(response)
        })
    }
}

fn new_request_id() -> HeaderValue {
    // Hyphenated UUIDs are ASCII, so this cannot fail.
    HeaderValue::from_str(&Uuid::new_v4().to_string())
        .expect("UUID string is a valid header value")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn echo() -> &'static str {
        "ok"
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let app = Router::new().route("/", get(echo)).layer(RequestIdLayer);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response
            .headers()
            .get(X_REQUEST_ID)
            .expect("response should carry an id");
        assert_eq!(id.to_str().unwrap().len(), 36);
    }

    #[tokio::test]
    async fn test_keeps_client_supplied_id() {
        let app = Router::new().route("/", get(echo)).layer(RequestIdLayer);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(X_REQUEST_ID, "caller-chosen")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(X_REQUEST_ID).unwrap(),
            "caller-chosen"
        );
    }
}
