//! Route-key generation.
//!
//! Entities are addressed from routes by a slug of their display name, not
//! by id. Slugs are not unique; lookups resolve collisions first-match in
//! entity list order.

/// Derive a URL-safe key from a display name: lowercase, trim, collapse
/// internal whitespace runs to a single hyphen, then strip every character
/// outside `[a-z0-9-]`.
///
/// Pure and idempotent. Characters removed between two whitespace runs
/// leave their hyphens behind (`"foo & bar"` becomes `"foo--bar"`).
#[must_use]
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for (i, word) in lowered.split_whitespace().enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.extend(
            word.chars()
                .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')),
        );
    }

    out
}

///
/// TESTS
///
