//! HTTP response builders
//!
//! One builder per response shape the server can produce. Builder failures
//! fall back to an empty response with a logged error rather than panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the preflight `OPTIONS` response: bare 200, empty body.
///
/// No Content-Type or Content-Length negotiation happens here; the CORS
/// headers a preflight actually needs are injected by the middleware.
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 301 redirect response (directory URL missing its trailing slash)
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Moved Permanently")))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::from("Moved Permanently")))
        })
}

/// Build generic HTML response (directory listings)
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a file response with its inferred content type and `ETag`
pub fn build_file_response(
    data: &[u8],
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn options_response_is_bare_200() {
        let response = build_options_response();
        assert_eq!(response.status(), 200);
        assert!(response.headers().get("content-type").is_none());
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn not_found_response() {
        let response = build_404_response();
        assert_eq!(response.status(), 404);
        assert_eq!(body_bytes(response).await.as_ref(), b"404 Not Found");
    }

    #[test]
    fn method_not_allowed_lists_supported_methods() {
        let response = build_405_response();
        assert_eq!(response.status(), 405);
        assert_eq!(
            response.headers().get("allow").unwrap(),
            "GET, HEAD, OPTIONS"
        );
    }

    #[test]
    fn redirect_sets_location() {
        let response = build_redirect_response("/subdir/");
        assert_eq!(response.status(), 301);
        assert_eq!(response.headers().get("location").unwrap(), "/subdir/");
    }

    #[tokio::test]
    async fn head_file_response_has_length_but_no_body() {
        let response = build_file_response(b"payload", "text/plain", "\"e\"", true);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("content-length").unwrap(), "7");
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn file_response_carries_exact_bytes() {
        let data = b"\x00\x01binary\xff";
        let response = build_file_response(data, "application/octet-stream", "\"e\"", false);
        assert_eq!(body_bytes(response).await.as_ref(), data);
    }
}
