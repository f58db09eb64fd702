//! SQL identifier checks

use std::sync::OnceLock;

use regex::Regex;

fn identifier_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z_][a-zA-Z_0-9]*").expect("Invalid regex"))
}

fn qualified_identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z_][a-zA-Z_0-9]*(\.[a-zA-Z_][a-zA-Z_0-9]*)*$").expect("Invalid regex")
    })
}

/// Check whether the token contains an identifier-like run anywhere
///
/// The match is not anchored, so `Foo.Bar`, `"quoted"` and `x[1]` all pass
/// as long as some letter/underscore run is present. Tokens made only of
/// digits and punctuation (`42`, `'%'`) do not.
///
/// # Example
///
/// ```
/// use wherefilter::utils::sql::contains_identifier;
///
/// assert!(contains_identifier("Foo.Bar.X"));
/// assert!(!contains_identifier("123"));
/// ```
pub fn contains_identifier(s: &str) -> bool {
    identifier_run().is_match(s)
}

/// Check whether the whole token is an identifier, optionally dot-qualified
pub fn is_qualified_identifier(s: &str) -> bool {
    qualified_identifier().is_match(s)
}
