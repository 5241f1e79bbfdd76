//! Outbound dispatch to the destination endpoint.

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, Method, Request, Response, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::forward::error::ForwardError;
use crate::http::request::X_REQUEST_ID;

/// HTTP client shared across all requests.
pub type ForwardClient = Client<HttpConnector, Body>;

/// Build the client used for every outbound call.
pub fn build_client() -> ForwardClient {
    Client::builder(TokioExecutor::new()).build(HttpConnector::new())
}

/// Issue the single outbound POST carrying `body` to `destination`.
///
/// The destination's response comes back untouched, whatever its status. A
/// dispatch failure means no response was obtained and maps to
/// [`ForwardError::NoResponse`]; a failure to construct the request maps to
/// [`ForwardError::Internal`].
pub async fn forward(
    client: &ForwardClient,
    destination: &str,
    request_id: &str,
    body: Bytes,
) -> Result<Response<hyper::body::Incoming>, ForwardError> {
    let uri: Uri = destination
        .parse()
        .map_err(|e: axum::http::uri::InvalidUri| ForwardError::Internal(e.to_string()))?;

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )
        .header(X_REQUEST_ID, request_id)
        .body(Body::from(body))
        .map_err(|e| ForwardError::Internal(e.to_string()))?;

    match client.request(request).await {
        Ok(response) => Ok(response),
        Err(e) => {
            // The transport error stays in the logs; the caller only sees
            // the fixed message.
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "No response from destination"
            );
            Err(ForwardError::NoResponse)
        }
    }
}
