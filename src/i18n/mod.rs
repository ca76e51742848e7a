//! Language negotiation module
//!
//! Turns the client's `Accept-Language` header into one of the languages
//! the thesis collection is available in.

mod accept_language;

pub use accept_language::negotiate;
