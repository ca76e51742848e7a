//! HTML rendering module
//!
//! Pages are built from a shared head/stylesheet plus a per-page body.
//! Rendering never computes anything: callers hand over a fully resolved
//! view and the templates only check which links are present.

mod about;
mod thesis;

pub use about::render_about;
pub use thesis::{render_thesis, ThesisPage};

/// Document prologue and stylesheet shared by every page
const BASE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset=utf-8>
<style>
body {
    background-color: white;
}
a {
    text-decoration: none;
    color: #336;
}
.n {
    position: absolute;
    top: 65px;
    left: 10%;
    color: #dcdcdc;
    font-size: 120pt;
    letter-spacing: -8px;
    z-index: -1;
}
.t {
    margin: 100px 16%;
    color: #666;
    font-size: 24pt;
}
.h {
    text-align: center;
    font-size: 175%;
}
.d {
    color: #d8d8d8;
}
</style>
"#;

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("Märkte sind Gespräche."), "Märkte sind Gespräche.");
        assert_eq!(escape_html(""), "");
    }
}
