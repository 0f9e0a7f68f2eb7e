//! Normalization of user input into the upstream query mini-language
//!
//! The upstream search understands operators such as `from:` and parenthesised
//! grouping. Users tend to type a bare `@handle`, so that case is rewritten;
//! anything else is forwarded as typed.

/// Normalize free-form search input.
///
/// - `@handle` (no parenthesis) becomes `(from:handle)`
/// - input already using the mini-language (`(` or `:`) is left alone
/// - plain keywords are left alone
pub fn normalize_search_query(input: &str) -> String {
    match input.strip_prefix('@') {
        Some(handle) if !input.contains('(') => from_handle(handle),
        _ => input.to_string(),
    }
}

/// Build the query for a user's timeline, stripping one leading `@`.
pub fn user_timeline_query(username: &str) -> String {
    from_handle(username.strip_prefix('@').unwrap_or(username))
}

// `@` on its own yields `(from:)`; the upstream decides whether that is valid.
fn from_handle(handle: &str) -> String {
    format!("(from:{handle})")
}
