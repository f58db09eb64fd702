//! Full-statement keyword pre-scan
//!
//! A coarse check against pasting a whole SQL statement where only a filter
//! is expected. It is not a security control: matching is case-sensitive
//! substring search on upper-case keywords, so `select` slips through while
//! a field such as `ALLOWED` (contains `ALL`) is rejected.

use super::error::FilterError;

pub const FORBIDDEN_KEYWORDS: [&str; 18] = [
    "WHERE", "SELECT", "INSERT", "UPDATE", "DELETE", "VALUES", "FROM", "GROUP", "HAVING", "WINDOW",
    "ALL", "DISTINCT", "ORDER", "LIMIT", "OFFSET", "FETCH", "FOR", "SET",
];

/// Reject input containing any forbidden keyword, naming the first one in list order
pub fn check_forbidden_keywords(input: &str) -> Result<(), FilterError> {
    match FORBIDDEN_KEYWORDS.iter().copied().find(|kw| input.contains(kw)) {
        Some(keyword) => Err(FilterError::ForbiddenKeyword { keyword }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_filter() {
        assert!(check_forbidden_keywords("Foo.Bar > 21 AND Baz = 'x'").is_ok());
    }

    #[test]
    fn rejects_full_statement() {
        let err = check_forbidden_keywords("SELECT * FROM cats").unwrap_err();
        assert_eq!(err, FilterError::ForbiddenKeyword { keyword: "SELECT" });
    }

    #[test]
    fn reports_first_keyword_in_list_order() {
        let err = check_forbidden_keywords("a = 1 ORDER BY x WHERE").unwrap_err();
        assert_eq!(err, FilterError::ForbiddenKeyword { keyword: "WHERE" });
    }

    #[test]
    fn matches_substrings() {
        let err = check_forbidden_keywords("ALLOWED = 1").unwrap_err();
        assert_eq!(err, FilterError::ForbiddenKeyword { keyword: "ALL" });
    }

    #[test]
    fn lowercase_keywords_are_not_caught() {
        assert!(check_forbidden_keywords("a = 1; delete from cats").is_ok());
    }
}
