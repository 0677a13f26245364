//! Activation: capture, scan, observe, install.

use std::sync::Arc;
use tagalong_dom::{AdditionObserver, DocumentHost, LinkPatcher};
use tagalong_nav::NavigationHooks;
use tagalong_params::ParamStore;
use tagalong_rewrite::UrlRewriter;
use url::Url;

/// Outcome of engine activation.
#[derive(Debug)]
pub enum Activation {
    /// No allowed parameter was present on the initial URL. Nothing was
    /// scanned, observed, or installed; the page behaves as if the
    /// engine were absent.
    Dormant,

    /// Parameters were captured; anchors are patched, additions are
    /// observed, and navigation hooks are installed.
    Active {
        /// The captured snapshot driving every rewrite.
        store: Arc<ParamStore>,
    },
}

impl Activation {
    /// Whether activation installed anything.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Activate the propagation engine against a loaded document.
///
/// Runs once per page load; there is no teardown, the observation
/// subscription and navigation hooks live until the host goes away.
/// Reloading recreates everything from scratch.
///
/// Call order matters only in one place: the initial anchor scan runs
/// before hook installation so markup present at load is covered even if
/// the page navigates immediately.
pub fn activate(document: &Arc<dyn DocumentHost>, hooks: &NavigationHooks) -> Activation {
    let initial = document.base_url();
    let store = Arc::new(ParamStore::capture(&initial));
    if store.is_empty() {
        tracing::debug!(url = %initial, "no allowed parameters on initial URL, engine dormant");
        return Activation::Dormant;
    }
    if hooks.is_installed() {
        tracing::warn!("engine already activated for this document, ignoring");
        return Activation::Active { store };
    }
    tracing::info!(captured = store.len(), "attribution parameters captured");

    let origin = origin_base(&initial);
    let rewriter = UrlRewriter::new(Arc::clone(&store));
    let patcher = Arc::new(LinkPatcher::new(rewriter.clone(), origin.clone()));

    patcher.scan(document.as_ref());
    document.observe_additions(Arc::clone(&patcher) as Arc<dyn AdditionObserver>);
    hooks.install(rewriter, origin);

    Activation::Active { store }
}

/// Origin of the document URL: path, query, and fragment cleared.
///
/// Capture reads the full initial URL, but rewriting resolves targets
/// against the origin, so a path-relative href on a nested page still
/// lands at the site root the way markup authors expect.
fn origin_base(initial: &Url) -> Url {
    initial.join("/").unwrap_or_else(|_| initial.clone())
}
