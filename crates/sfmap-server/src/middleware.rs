use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id for one request, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Caller-supplied id, if it is non-empty and printable.
fn incoming_id(headers: &HeaderMap) -> Option<(String, HeaderValue)> {
    let value = headers.get(REQUEST_ID_HEADER)?;
    let id = value.to_str().ok().filter(|v| !v.is_empty())?;
    Some((id.to_owned(), value.clone()))
}

/// Tags every request with a [`RequestId`] and echoes it as `x-request-id`.
///
/// A caller-supplied id is kept as is; otherwise a fresh `UUIDv4` is used.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let (id, header) = incoming_id(req.headers()).unwrap_or_else(|| {
        let id = Uuid::new_v4().to_string();
        // hyphenated UUIDs are always valid header values
        let header = HeaderValue::from_str(&id).unwrap_or(HeaderValue::from_static("unknown"));
        (id, header)
    });

    req.extensions_mut().insert(RequestId(id));

    let mut res = next.run(req).await;
    res.headers_mut().insert(REQUEST_ID_HEADER, header);
    res
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        routing::get,
        Extension, Router,
    };
    use tower::ServiceExt;

    use super::*;

    fn echo_app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(id): Extension<RequestId>| async move { id.0 }),
            )
            .layer(axum::middleware::from_fn(request_id))
    }

    async fn call(header: Option<&str>) -> (Option<String>, String) {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(REQUEST_ID_HEADER, value);
        }
        let response = echo_app()
            .oneshot(builder.body(Body::empty()).expect("request"))
            .await
            .expect("response");

        let echoed = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (echoed, String::from_utf8(body.to_vec()).expect("utf8 body"))
    }

    #[tokio::test]
    async fn caller_id_reaches_handler_and_response() {
        let (echoed, seen) = call(Some("req-123")).await;
        assert_eq!(echoed.as_deref(), Some("req-123"));
        assert_eq!(seen, "req-123");
    }

    #[tokio::test]
    async fn missing_id_gets_a_uuid() {
        let (echoed, seen) = call(None).await;
        let echoed = echoed.expect("generated id");
        assert!(Uuid::parse_str(&echoed).is_ok(), "expected a UUID, got {echoed}");
        assert_eq!(seen, echoed);
    }

    #[tokio::test]
    async fn empty_id_is_replaced() {
        let (echoed, _) = call(Some("")).await;
        let echoed = echoed.expect("generated id");
        assert!(Uuid::parse_str(&echoed).is_ok());
    }
}
