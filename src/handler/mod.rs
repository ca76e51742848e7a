//! Request handler module
//!
//! Responsible for request routing dispatch and page handlers: random
//! redirect, thesis pages and the about page.

pub mod pages;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
