//! Path utilities for tokenizing and normalizing navigation paths
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Removes the query string and fragment from a path
///
/// Everything from the first `?` or `#` onwards is opaque to route matching.
///
/// # Examples
///
/// ```
/// use desk_router::path::strip_suffix;
///
/// assert_eq!(strip_suffix("/tickets/42?tab=activity"), "/tickets/42");
/// assert_eq!(strip_suffix("/tickets#top"), "/tickets");
/// assert_eq!(strip_suffix("/tickets"), "/tickets");
/// ```
pub fn strip_suffix(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |idx| &path[..idx])
}

/// Splits a path into its ordered, non-empty tokens
///
/// Trailing slashes, doubled slashes and backslashes never produce tokens, so
/// `/tickets/42`, `/tickets/42/` and `\tickets\42` tokenize identically.
/// Tokens are borrowed verbatim: no percent-decoding, no trimming.
///
/// # Examples
///
/// ```
/// use desk_router::path::tokenize;
///
/// assert_eq!(tokenize("/tickets/42/"), vec!["tickets", "42"]);
/// assert_eq!(tokenize("//support\\tickets"), vec!["support", "tickets"]);
/// assert!(tokenize("/").is_empty());
/// ```
pub fn tokenize(path: &str) -> Vec<&str> {
    strip_suffix(path)
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .collect()
}

/// Joins tokens back into a canonical path (`/` when there are none)
///
/// # Examples
///
/// ```
/// use desk_router::path::join_tokens;
///
/// assert_eq!(join_tokens(&["frappedesk", "tickets"]), "/frappedesk/tickets");
/// assert_eq!(join_tokens::<&str>(&[]), "/");
/// ```
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    if tokens.is_empty() {
        return "/".to_string();
    }
    tokens.iter().fold(String::new(), |mut acc, token| {
        acc.push('/');
        acc.push_str(token.as_ref());
        acc
    })
}

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`, `\`, `?` or `#`
/// - Must not end with `/` (except root `/`)
///
/// # Examples
///
/// ```
/// use desk_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/support/tickets"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("support"));
/// assert!(!is_valid_path("/support/"));
/// assert!(!is_valid_path("/support//tickets"));
/// assert!(!is_valid_path("/support?x=1"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains(['\\', '?', '#']) {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations),
/// `Cow::Owned` when normalization was needed.
///
/// # Examples
///
/// ```
/// use desk_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/tickets");
/// assert!(matches!(path, Cow::Borrowed("/tickets")));
///
/// assert_eq!(normalize_path("/tickets/"), "/tickets");
/// assert_eq!(normalize_path("tickets//42?tab=1"), "/tickets/42");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    Cow::Owned(join_tokens(&tokenize(path)))
}
