//! HTTP protocol layer module
//!
//! Provides HTTP response builders, decoupled from page rendering and
//! routing.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_health_response, build_html_response,
    build_options_response, build_redirect_response_with_code, set_server_header,
};
