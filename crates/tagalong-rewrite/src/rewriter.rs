//! The candidate-URL rewriting rule.

use crate::scheme::is_navigable_scheme;
use std::sync::Arc;
use tagalong_params::ParamStore;
use url::Url;

/// Why a candidate came back unchanged.
///
/// Never escapes the public surface; every variant degrades to "return the
/// input" and is visible at trace level only.
#[derive(Debug, thiserror::Error)]
enum Skip {
    /// Candidate contains whitespace/control characters or cannot be
    /// resolved to an absolute URL against the base.
    #[error("candidate cannot be resolved to an absolute URL")]
    Malformed,

    /// Resolved scheme is excluded from rewriting.
    #[error("scheme {0:?} is excluded from rewriting")]
    ExcludedScheme(String),

    /// Every captured key is already present on the target.
    #[error("no missing keys to inject")]
    AlreadyComplete,
}

/// Pure rewriting rule: inject captured attribution parameters into a
/// candidate URL without overriding values already present.
///
/// Rewriting is fail-open. Whatever goes wrong, the caller gets a string
/// back and navigation proceeds as if the engine were absent.
#[derive(Debug, Clone)]
pub struct UrlRewriter {
    store: Arc<ParamStore>,
}

impl UrlRewriter {
    /// Create a rewriter over a captured parameter snapshot.
    #[inline]
    #[must_use]
    pub fn new(store: Arc<ParamStore>) -> Self {
        Self { store }
    }

    /// The parameter snapshot this rewriter injects.
    #[inline]
    #[must_use]
    pub fn store(&self) -> &ParamStore {
        &self.store
    }

    /// Rewrite `candidate` (absolute or relative) against `base`.
    ///
    /// Returns the serialized absolute URL with every captured parameter
    /// present, or `candidate` byte-for-byte unchanged when rewriting is
    /// not applicable (malformed input, excluded scheme, or nothing
    /// missing to inject).
    ///
    /// # Guarantees
    /// - Non-override: existing query values are never replaced
    /// - Idempotence: applying the rule twice equals applying it once
    /// - Determinism: missing keys are injected in allowlist order
    #[must_use]
    pub fn rewrite(&self, candidate: &str, base: &Url) -> String {
        match self.try_rewrite(candidate, base) {
            Ok(rewritten) => rewritten,
            Err(skip) => {
                tracing::trace!(candidate, %skip, "rewrite skipped");
                candidate.to_owned()
            }
        }
    }

    fn try_rewrite(&self, candidate: &str, base: &Url) -> Result<String, Skip> {
        // Stricter than the WHATWG parser, which silently strips tabs and
        // newlines: a candidate with embedded whitespace or controls is
        // treated as malformed and left alone.
        if candidate
            .chars()
            .any(|c| c.is_ascii_whitespace() || c.is_ascii_control())
        {
            return Err(Skip::Malformed);
        }

        let mut resolved = base.join(candidate).map_err(|_| Skip::Malformed)?;

        if !is_navigable_scheme(resolved.scheme()) {
            return Err(Skip::ExcludedScheme(resolved.scheme().to_owned()));
        }

        let missing: Vec<(&str, &str)> = self
            .store
            .entries()
            .filter(|(key, _)| !has_query_key(&resolved, key))
            .collect();
        if missing.is_empty() {
            return Err(Skip::AlreadyComplete);
        }

        {
            let mut pairs = resolved.query_pairs_mut();
            for (key, value) in missing {
                pairs.append_pair(key, value);
            }
        }

        Ok(resolved.into())
    }
}

/// Whether the URL's query component already contains `key`.
///
/// Presence alone counts; `?token` with no value still blocks injection,
/// mirroring query-string `has` semantics.
fn has_query_key(url: &Url, key: &str) -> bool {
    url.query_pairs().any(|(k, _)| k.as_ref() == key)
}
