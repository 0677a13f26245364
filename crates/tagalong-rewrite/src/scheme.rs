//! Scheme policy for rewrite eligibility.

/// Schemes whose targets must never be rewritten.
///
/// Mail links, telephone links, and script-execution pseudo-URLs carry no
/// navigation query a tracking parameter could attach to; touching them
/// would corrupt the target.
const EXCLUDED_SCHEMES: [&str; 3] = ["mailto", "tel", "javascript"];

/// Whether a resolved URL with `scheme` is eligible for rewriting.
///
/// Expects the scheme as produced by the WHATWG parser: lowercase,
/// without the trailing colon.
#[inline]
#[must_use]
pub fn is_navigable_scheme(scheme: &str) -> bool {
    !EXCLUDED_SCHEMES.contains(&scheme)
}
