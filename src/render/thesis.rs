use super::{escape_html, BASE_HEAD};
use crate::navigation::Navigation;
use std::fmt::Write;

/// Everything needed to render one thesis page
#[derive(Debug, Clone)]
pub struct ThesisPage<'a> {
    /// Number shown in the title and background (`404` when not found)
    pub display_index: usize,
    /// Unescaped thesis text
    pub text: &'a str,
    pub nav: Navigation,
}

/// Render a thesis page
pub fn render_thesis(page: &ThesisPage<'_>) -> String {
    let mut html = String::with_capacity(BASE_HEAD.len() + 1024);
    html.push_str(BASE_HEAD);

    let n = page.display_index;
    let _ = write!(
        html,
        "<title>clue #{n}</title>\n</head>\n<body>\n<p class=\"h\">\n"
    );

    push_link(&mut html, page.nav.first, "first", "«");
    push_link(&mut html, page.nav.prev, "previous", "‹");
    html.push_str(
        "    &#x2003;<a href=\"/\" title=\"random\">*</a>&#x2003;<a href=\"/about\" title=\"about\">?</a>&#x2003;\n",
    );
    push_link(&mut html, page.nav.next, "next", "›");
    push_link(&mut html, page.nav.last, "last", "»");

    let _ = write!(
        html,
        "</p>\n<div class=\"n\">{n}</div>\n<div class=\"t\">{}</div>\n</body>\n</html>\n",
        escape_html(page.text)
    );

    html
}

/// Active link when the target exists, greyed-out glyph otherwise
fn push_link(html: &mut String, target: Option<usize>, title: &str, glyph: &str) {
    let _ = match target {
        Some(index) => writeln!(html, "    <a href=\"/{index}\" title=\"{title}\">{glyph}</a>"),
        None => writeln!(html, "    <span class=\"d\">{glyph}</span>"),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize, total: usize, text: &str) -> String {
        render_thesis(&ThesisPage {
            display_index: n,
            text,
            nav: Navigation::resolve(n, total),
        })
    }

    #[test]
    fn test_first_page_links() {
        let html = page(1, 5, "Markets are conversations.");
        assert!(html.contains("<title>clue #1</title>"));
        assert!(html.contains("<div class=\"n\">1</div>"));
        assert!(html.contains("<div class=\"t\">Markets are conversations.</div>"));
        assert!(!html.contains("title=\"first\""));
        assert!(!html.contains("title=\"previous\""));
        assert!(html.contains("<span class=\"d\">«</span>"));
        assert!(html.contains("<span class=\"d\">‹</span>"));
        assert!(html.contains("<a href=\"/2\" title=\"next\">›</a>"));
        assert!(html.contains("<a href=\"/5\" title=\"last\">»</a>"));
    }

    #[test]
    fn test_last_page_links() {
        let html = page(5, 5, "x");
        assert!(html.contains("<a href=\"/1\" title=\"first\">«</a>"));
        assert!(html.contains("<a href=\"/4\" title=\"previous\">‹</a>"));
        assert!(html.contains("<span class=\"d\">›</span>"));
        assert!(html.contains("<span class=\"d\">»</span>"));
    }

    #[test]
    fn test_random_and_about_always_present() {
        let html = page(1, 1, "only");
        assert!(html.contains("<a href=\"/\" title=\"random\">*</a>"));
        assert!(html.contains("<a href=\"/about\" title=\"about\">?</a>"));
        assert_eq!(html.matches("class=\"d\"").count(), 4);
    }

    #[test]
    fn test_text_is_escaped() {
        let html = page(1, 1, "<script>alert('x')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
