//! Page handlers
//!
//! One function per user-facing route. Each returns a finished response;
//! none of them can fail once the collection is loaded.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http;
use crate::i18n;
use crate::navigation::Navigation;
use crate::render::{self, ThesisPage};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use rand::Rng;

/// Index shown in place of a missing thesis number
pub const NOT_FOUND_INDEX: usize = 404;
/// Text shown in place of a missing thesis
pub const NOT_FOUND_TEXT: &str = "not found";

/// Redirect to a uniformly random thesis of the default language
pub fn serve_random(state: &AppState) -> Response<Full<Bytes>> {
    let n = pick_random_index(&mut rand::thread_rng(), state.theses.default_len());
    http::build_redirect_response_with_code(&format!("/{n}"), state.config.http.redirect_status)
}

/// Uniform pick from `1..=total`
///
/// `total` is at least 1: the default language is validated non-empty when
/// the collection is loaded.
pub fn pick_random_index<R: Rng>(rng: &mut R, total: usize) -> usize {
    rng.gen_range(1..=total.max(1))
}

/// Render thesis `n` in the language negotiated from `Accept-Language`
pub fn serve_thesis(ctx: &RequestContext<'_>, state: &AppState, n: usize) -> Response<Full<Bytes>> {
    let theses = &state.theses;
    let supported = theses.supported_languages();
    let language = i18n::negotiate(ctx.accept_language, &supported, theses.default_language());

    let nav = Navigation::resolve(n, theses.sequence(language).len());
    let (page, status) = match theses.get(language, n) {
        Some(text) if nav.found => (
            ThesisPage {
                display_index: n,
                text,
                nav,
            },
            200,
        ),
        _ => (
            ThesisPage {
                display_index: NOT_FOUND_INDEX,
                text: NOT_FOUND_TEXT,
                nav,
            },
            state.config.http.not_found_status,
        ),
    };

    http::build_html_response(
        status,
        render::render_thesis(&page),
        Some(language),
        ctx.is_head,
    )
}

/// Static about page
pub fn serve_about(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    http::build_html_response(200, render::render_about(), None, ctx.is_head)
}
