//! Longest-prefix resolution of input tokens against a registry.
//!
//! Tokens are lower-cased and joined left to right with `.`; every prefix
//! is looked up and the longest one present wins. The scan does not stop
//! at the first miss, so `a.b.c` still matches when only `a.b.c` (and not
//! `a` or `a.b`) is registered.

use dotcmd_types::path::SEPARATOR;

use crate::registry::Registry;

/// A successful match.
#[derive(Debug)]
pub struct Resolution<'r, T> {
    /// Canonical path that matched.
    pub path: &'r str,
    pub entry: &'r T,
    /// Number of leading tokens the path covers.
    pub consumed: usize,
}

impl<T> Clone for Resolution<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolution<'_, T> {}

impl<T> Resolution<'_, T> {
    /// The tokens left over after stripping the matched path.
    pub fn remaining<'t, S>(&self, tokens: &'t [S]) -> &'t [S] {
        &tokens[self.consumed.min(tokens.len())..]
    }
}

/// Whether a raw token could ever be a path segment.
fn is_segment(token: &str) -> bool {
    !token.is_empty() && !token.contains(SEPARATOR) && !token.chars().any(char::is_whitespace)
}

/// Find the longest registered path formed by a leading run of `tokens`.
///
/// Returns `None` if no prefix is registered. A token that cannot be a
/// path segment (empty, dotted, or containing whitespace) ends the scan.
pub fn resolve<'r, T, S: AsRef<str>>(
    registry: &'r Registry<T>,
    tokens: &[S],
) -> Option<Resolution<'r, T>> {
    let mut candidate = String::new();
    let mut best = None;

    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if !is_segment(token) {
            break;
        }
        if !candidate.is_empty() {
            candidate.push(SEPARATOR);
        }
        candidate.push_str(&token.to_lowercase());

        if let Some((path, entry)) = registry.lookup_key_value(&candidate) {
            best = Some(Resolution {
                path,
                entry,
                consumed: i + 1,
            });
        }
    }

    best
}
