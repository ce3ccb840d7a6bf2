//! CORS header injection
//!
//! Every response leaves the server through [`apply`], which inserts the
//! three fixed headers. Error responses get them too, so a cross-origin
//! browser client can read a 404 body instead of seeing an opaque failure.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use hyper::Response;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Insert the fixed CORS headers into an outgoing response.
///
/// Called once per request at the connection service, after the handler has
/// produced its response and regardless of the status code.
pub fn apply(mut response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http;

    fn header<'a>(response: &'a Response<Full<Bytes>>, name: &str) -> &'a str {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_else(|| panic!("missing header {name}"))
    }

    #[test]
    fn injects_all_three_headers() {
        let response = apply(http::build_options_response());
        assert_eq!(header(&response, "access-control-allow-origin"), "*");
        assert_eq!(
            header(&response, "access-control-allow-methods"),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            header(&response, "access-control-allow-headers"),
            "Content-Type"
        );
    }

    #[test]
    fn error_responses_get_headers_too() {
        for response in [
            http::build_404_response(),
            http::build_405_response(),
            http::build_500_response(),
        ] {
            let status = response.status();
            let response = apply(response);
            assert_eq!(response.status(), status);
            assert_eq!(header(&response, "access-control-allow-origin"), "*");
            assert_eq!(
                header(&response, "access-control-allow-methods"),
                "GET, POST, OPTIONS"
            );
            assert_eq!(
                header(&response, "access-control-allow-headers"),
                "Content-Type"
            );
        }
    }

    #[test]
    fn existing_cors_headers_are_replaced_not_duplicated() {
        let once = apply(http::build_404_response());
        let twice = apply(once);
        let values: Vec<_> = twice
            .headers()
            .get_all("access-control-allow-origin")
            .iter()
            .collect();
        assert_eq!(values.len(), 1);
    }
}
