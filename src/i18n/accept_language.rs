//! `Accept-Language` parsing and language selection
//!
//! Header grammar handled here is the usual comma-separated list of
//! `tag[;name=value]*` entries. Only the `q` parameter is interpreted.

/// A single parsed `Accept-Language` entry
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    /// Tag exactly as sent by the client, minus surrounding whitespace
    pub tag: String,
    /// Preference weight in `[0, 1]`
    pub weight: f32,
}

/// Parse an `Accept-Language` value into preferences ordered by weight
///
/// The sort is stable: entries with equal weight keep the order in which the
/// client listed them. Malformed entries never fail the parse, they only get
/// weight 0.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    let mut preferences: Vec<LanguagePreference> = header.split(',').map(parse_entry).collect();
    preferences.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    preferences
}

/// Pick the first supported language from the client's preferences
///
/// Each tag is reduced to its first two characters (the primary language
/// subtag for the common `xx-YY` form) before the membership test. Returns
/// `default` when the header is absent, empty, or names nothing supported.
pub fn negotiate<'a>(header: Option<&str>, supported: &[&'a str], default: &'a str) -> &'a str {
    let Some(header) = header.filter(|h| !h.trim().is_empty()) else {
        return default;
    };

    parse_accept_language(header)
        .iter()
        .find_map(|preference| {
            let primary = primary_subtag(&preference.tag);
            supported.iter().copied().find(|code| *code == primary)
        })
        .unwrap_or(default)
}

fn parse_entry(entry: &str) -> LanguagePreference {
    let mut parts = entry.split(';');
    let tag = parts.next().unwrap_or_default().trim().to_string();

    // An empty entry (e.g. trailing comma) can never match anything
    let weight = if tag.is_empty() { 0.0 } else { parse_weight(parts) };

    LanguagePreference { tag, weight }
}

/// Weight from the entry's parameters: 1.0 when `q` is absent, 0 when any
/// parameter is malformed or `q` is not a number in `[0, 1]`
fn parse_weight<'a>(params: impl Iterator<Item = &'a str>) -> f32 {
    let mut q = None;
    for param in params {
        let Some((name, value)) = param.split_once('=') else {
            return 0.0;
        };
        if name.trim() == "q" {
            q = Some(value.trim());
        }
    }

    q.map_or(1.0, |value| {
        value
            .parse::<f32>()
            .ok()
            .filter(|w| (0.0..=1.0).contains(w))
            .unwrap_or(0.0)
    })
}

/// First two characters of a tag, or the whole tag if shorter
fn primary_subtag(tag: &str) -> &str {
    tag.char_indices().nth(2).map_or(tag, |(idx, _)| &tag[..idx])
}
