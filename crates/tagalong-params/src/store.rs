//! Write-once snapshot of allowed parameters from the initial URL.

use crate::keys::ALLOWED_KEYS;
use indexmap::IndexMap;
use serde::Serialize;
use url::Url;

/// Immutable snapshot of the allowed query parameters present on the
/// document's initial URL.
///
/// Captured exactly once at activation; there is no mutating method, so
/// the store can be shared freely between the link patcher and the
/// navigation interceptor without synchronization. Iteration always
/// follows [`ALLOWED_KEYS`] order, regardless of the order keys appeared
/// in the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamStore {
    entries: IndexMap<&'static str, String>,
}

impl ParamStore {
    /// Capture the allowed parameters present on `initial_url`.
    ///
    /// For each key in [`ALLOWED_KEYS`], the first matching query value is
    /// copied into the store. Values receive standard URL-query
    /// percent-decoding and nothing else; they are never validated.
    /// Keys absent from the query are simply not captured.
    #[must_use]
    pub fn capture(initial_url: &Url) -> Self {
        let mut entries = IndexMap::new();
        for key in ALLOWED_KEYS {
            let found = initial_url
                .query_pairs()
                .find(|(k, _)| k.as_ref() == key)
                .map(|(_, v)| v.into_owned());
            if let Some(value) = found {
                entries.insert(key, value);
            }
        }
        Self { entries }
    }

    /// Whether no allowed key was present at capture time.
    ///
    /// An empty store means the engine has nothing to propagate and must
    /// install nothing at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of captured parameters.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether `key` was captured.
    #[inline]
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Captured value for `key`, if present.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate captured `(key, value)` pairs in [`ALLOWED_KEYS`] order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
