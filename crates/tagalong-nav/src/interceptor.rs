//! URL-rewriting decorator over [`NavigationHost`].

use crate::host::NavigationHost;
use serde_json::Value;
use std::sync::Arc;
use tagalong_rewrite::UrlRewriter;
use url::Url;

/// Decorates a raw [`NavigationHost`] so every outgoing URL argument is
/// rewritten before the underlying behavior runs.
///
/// All non-URL arguments are delegated unchanged, and the read side
/// passes through unrewritten. Scheme exclusion applies uniformly,
/// including history-stack updates.
pub struct NavigationInterceptor {
    inner: Arc<dyn NavigationHost>,
    rewriter: UrlRewriter,
    base: Url,
}

impl NavigationInterceptor {
    /// Wrap `inner`, rewriting URL arguments against `base`.
    #[must_use]
    pub fn new(inner: Arc<dyn NavigationHost>, rewriter: UrlRewriter, base: Url) -> Self {
        Self {
            inner,
            rewriter,
            base,
        }
    }

    fn rewrite(&self, url: &str) -> String {
        self.rewriter.rewrite(url, &self.base)
    }
}

impl NavigationHost for NavigationInterceptor {
    fn assign(&self, url: &str) {
        self.inner.assign(&self.rewrite(url));
    }

    fn replace(&self, url: &str) {
        self.inner.replace(&self.rewrite(url));
    }

    fn set_location(&self, url: &str) {
        self.inner.set_location(&self.rewrite(url));
    }

    fn location(&self) -> String {
        self.inner.location()
    }

    fn open(&self, url: &str, target: Option<&str>, features: Option<&str>) {
        self.inner.open(&self.rewrite(url), target, features);
    }

    fn push_state(&self, state: &Value, title: &str, url: Option<&str>) {
        match url {
            Some(u) => self.inner.push_state(state, title, Some(&self.rewrite(u))),
            None => self.inner.push_state(state, title, None),
        }
    }

    fn replace_state(&self, state: &Value, title: &str, url: Option<&str>) {
        match url {
            Some(u) => self
                .inner
                .replace_state(state, title, Some(&self.rewrite(u))),
            None => self.inner.replace_state(state, title, None),
        }
    }
}
