//! Navigation resolver
//!
//! Computes the first/previous/next/last links for a thesis page. Absent
//! links are `None` so the renderer only has to check presence.

/// Adjacent and boundary indices relative to the displayed thesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    /// Whether the requested index exists in the collection
    pub found: bool,
    pub first: Option<usize>,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub last: Option<usize>,
}

impl Navigation {
    /// Resolve navigation for item `n` of a `total`-item collection
    ///
    /// Indices are 1-based. An `n` outside `1..=total` yields the not-found
    /// state: only `first` and `last` are set, and only when the collection
    /// is non-empty.
    pub fn resolve(n: usize, total: usize) -> Self {
        if n == 0 || n > total {
            return Self {
                found: false,
                first: (total >= 1).then_some(1),
                prev: None,
                next: None,
                last: (total >= 1).then_some(total),
            };
        }

        let has_before = n > 1;
        let has_after = n < total;

        Self {
            found: true,
            first: has_before.then_some(1),
            prev: has_before.then(|| n - 1),
            next: has_after.then(|| n + 1),
            last: has_after.then_some(total),
        }
    }
}
