//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, route matching, dispatching and access logging.

use crate::config::AppState;
use crate::handler::pages;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, REFERER, USER_AGENT};
use hyper::{HeaderMap, Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub accept_language: Option<&'a str>,
}

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: &AppState,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let headers = req.headers();

    logger::log_headers_count(headers.len(), state.config.logging.show_headers);

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *method == Method::HEAD,
        accept_language: header_str(headers, ACCEPT_LANGUAGE.as_str()),
    };

    let mut response = route_request(method, &ctx, state);
    http::set_server_header(&mut response, &state.config.http.server_name);

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            ctx.path.to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(hyper::body::Body::size_hint(response.body()).lower())
            .unwrap_or(usize::MAX);
        entry.language = header_str(response.headers(), CONTENT_LANGUAGE.as_str())
            .map(ToString::to_string);
        entry.referer = header_str(headers, REFERER.as_str()).map(ToString::to_string);
        entry.user_agent = header_str(headers, USER_AGENT.as_str()).map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method and path
pub fn route_request(
    method: &Method,
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    if let Some(resp) = check_http_method(method) {
        return resp;
    }

    // Health check endpoints first, they must stay cheap
    let health = &state.config.routes.health;
    if health.enabled && (ctx.path == health.liveness_path || ctx.path == health.readiness_path) {
        return http::build_health_response("ok");
    }

    match ctx.path {
        "/" => pages::serve_random(state),
        "/about" => pages::serve_about(ctx),
        path => match parse_thesis_index(path) {
            Some(n) => pages::serve_thesis(ctx, state, n),
            None => http::build_404_response(),
        },
    }
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Parse `/<digits>` into a thesis index
///
/// Signs, empty segments, nested paths and values that overflow `usize`
/// are rejected so they fall through to a plain 404.
pub fn parse_thesis_index(path: &str) -> Option<usize> {
    let segment = path.strip_prefix('/')?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
