//! The static allowlist of propagated query-parameter names.

/// Query-parameter names eligible for propagation, in injection order.
///
/// Fixed at build time; never consulted for values, only for membership
/// and ordering. Every rewrite injects missing keys in exactly this
/// order, which is what makes rewriting deterministic.
pub const ALLOWED_KEYS: [&str; 8] = [
    "token", "source", "campaign", "content", "country", "keyword", "lang", "medium",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowlist_has_eight_keys() {
        assert_eq!(ALLOWED_KEYS.len(), 8);
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(ALLOWED_KEYS.contains(&"token"));
        assert!(ALLOWED_KEYS.contains(&"medium"));
        assert!(!ALLOWED_KEYS.contains(&"utm_source"));
        assert!(!ALLOWED_KEYS.contains(&"TOKEN"));
    }

    #[test]
    fn order_is_stable() {
        assert_eq!(ALLOWED_KEYS.first(), Some(&"token"));
        assert_eq!(ALLOWED_KEYS.last(), Some(&"medium"));
    }
}
