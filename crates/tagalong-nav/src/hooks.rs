//! One-time installable capability-slot registry.
//!
//! Calling code routes every imperative navigation through
//! [`NavigationHooks`]; this supersedes direct calls to the underlying
//! primitives, which is how interception works in a runtime that cannot
//! redefine host object methods. Before installation the hooks delegate
//! to the raw host unchanged; [`NavigationHooks::install`] swaps in the
//! rewriting interceptor exactly once.

use crate::host::NavigationHost;
use crate::interceptor::NavigationInterceptor;
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::sync::Arc;
use tagalong_rewrite::UrlRewriter;
use url::Url;

/// Registry of navigation capability slots with one-time interception.
pub struct NavigationHooks {
    raw: Arc<dyn NavigationHost>,
    wrapped: OnceCell<Arc<dyn NavigationHost>>,
}

impl NavigationHooks {
    /// Create hooks over the embedding's raw primitives.
    ///
    /// Until [`NavigationHooks::install`] runs, every call delegates to
    /// `raw` unchanged.
    #[must_use]
    pub fn new(raw: Arc<dyn NavigationHost>) -> Self {
        Self {
            raw,
            wrapped: OnceCell::new(),
        }
    }

    /// Install the rewriting interceptor around the raw primitives.
    ///
    /// The first call wins; repeated installation is a logged no-op
    /// rather than a double wrap, so the rewrite runs exactly once per
    /// navigation. Returns whether this call performed the installation.
    pub fn install(&self, rewriter: UrlRewriter, base: Url) -> bool {
        let interceptor: Arc<dyn NavigationHost> = Arc::new(NavigationInterceptor::new(
            Arc::clone(&self.raw),
            rewriter,
            base,
        ));
        let installed = self.wrapped.set(interceptor).is_ok();
        if installed {
            tracing::info!("navigation interception installed");
        } else {
            tracing::warn!("navigation interception already installed, ignoring");
        }
        installed
    }

    /// Whether the interceptor has been installed.
    #[inline]
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.wrapped.get().is_some()
    }

    fn current(&self) -> &Arc<dyn NavigationHost> {
        self.wrapped.get().unwrap_or(&self.raw)
    }
}

impl std::fmt::Debug for NavigationHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationHooks")
            .field("installed", &self.is_installed())
            .finish_non_exhaustive()
    }
}

impl NavigationHost for NavigationHooks {
    fn assign(&self, url: &str) {
        self.current().assign(url);
    }

    fn replace(&self, url: &str) {
        self.current().replace(url);
    }

    fn set_location(&self, url: &str) {
        self.current().set_location(url);
    }

    fn location(&self) -> String {
        self.current().location()
    }

    fn open(&self, url: &str, target: Option<&str>, features: Option<&str>) {
        self.current().open(url, target, features);
    }

    fn push_state(&self, state: &Value, title: &str, url: Option<&str>) {
        self.current().push_state(state, title, url);
    }

    fn replace_state(&self, state: &Value, title: &str, url: Option<&str>) {
        self.current().replace_state(state, title, url);
    }
}
