//! HTTP response building module
//!
//! Provides builders for the handful of responses the site produces,
//! decoupled from routing decisions.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderValue, ALLOW, CONTENT_LANGUAGE, CONTENT_LENGTH, CONTENT_TYPE, LOCATION, SERVER, VARY,
};
use hyper::{Response, StatusCode};

const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header(CONTENT_TYPE, "text/plain")
        .header(ALLOW, ALLOWED_METHODS)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(ALLOW, ALLOWED_METHODS)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build redirect response with a specific status code (302 or 303)
pub fn build_redirect_response_with_code(target: &str, code: u16) -> Response<Full<Bytes>> {
    Response::builder()
        .status(code)
        .header(LOCATION, target)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from("Redirecting...")))
        .unwrap_or_else(|e| {
            log_build_error(&code.to_string(), &e);
            Response::new(Full::new(Bytes::from("Redirecting...")))
        })
}

/// Build plain-text health probe response
pub fn build_health_response(body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/plain")
        .header("Cache-Control", "no-store")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build HTML page response
///
/// `language` adds `Content-Language` and `Vary: Accept-Language` for pages
/// whose content was negotiated.
pub fn build_html_response(
    status: u16,
    content: String,
    language: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    let mut builder = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .header(CONTENT_LENGTH, content_length);

    if let Some(language) = language {
        builder = builder
            .header(CONTENT_LANGUAGE, language)
            .header(VARY, "Accept-Language");
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("HTML", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Stamp the configured `Server` header onto a response
pub fn set_server_header(response: &mut Response<Full<Bytes>>, server_name: &str) {
    match HeaderValue::from_str(server_name) {
        Ok(value) => {
            response.headers_mut().insert(SERVER, value);
        }
        Err(e) => {
            crate::logger::log_warning(&format!("Invalid server name '{server_name}': {e}"));
        }
    }
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_html_response_with_language() {
        let response = build_html_response(200, "<p>hi</p>".to_string(), Some("de"), false);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "de");
        assert_eq!(response.headers()[VARY], "Accept-Language");
        assert_eq!(response.headers()[CONTENT_LENGTH], "9");
        assert_eq!(body_string(response).await, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_html_response_head_has_no_body() {
        let response = build_html_response(404, "<p>gone</p>".to_string(), None, true);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[CONTENT_LENGTH], "11");
        assert!(response.headers().get(CONTENT_LANGUAGE).is_none());
        assert_eq!(body_string(response).await, "");
    }

    #[test]
    fn test_redirect_response() {
        let response = build_redirect_response_with_code("/7", 303);
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/7");
    }

    #[test]
    fn test_405_allow_header() {
        let response = build_405_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], ALLOWED_METHODS);
    }

    #[test]
    fn test_server_header() {
        let mut response = build_options_response();
        set_server_header(&mut response, "cluetrain");
        assert_eq!(response.headers()[SERVER], "cluetrain");

        let mut response = build_options_response();
        set_server_header(&mut response, "bad\nname");
        assert!(response.headers().get(SERVER).is_none());
    }
}
