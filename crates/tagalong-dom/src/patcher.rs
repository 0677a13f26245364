//! In-place anchor rewriting over the host document.

use crate::host::{AddedNode, AdditionObserver, AnchorElement, DocumentHost};
use std::sync::Arc;
use tagalong_rewrite::UrlRewriter;
use url::Url;

/// Rewrites anchor targets in place, both during the initial document
/// scan and for elements added later via the mutation facility.
///
/// Re-delivery of the same node is harmless: rewriting is idempotent and
/// an already-complete href skips the attribute write entirely.
#[derive(Debug, Clone)]
pub struct LinkPatcher {
    rewriter: UrlRewriter,
    base: Url,
}

impl LinkPatcher {
    /// Create a patcher rewriting against `base`.
    #[inline]
    #[must_use]
    pub fn new(rewriter: UrlRewriter, base: Url) -> Self {
        Self { rewriter, base }
    }

    /// Rewrite every anchor currently attached to `host`.
    pub fn scan(&self, host: &dyn DocumentHost) {
        let anchors = host.anchors();
        tracing::debug!(count = anchors.len(), "scanning document anchors");
        for anchor in anchors {
            self.patch(anchor.as_ref());
        }
    }

    /// Rewrite a single anchor's `href` attribute.
    ///
    /// Anchors without an `href` are skipped, and the write is skipped
    /// when rewriting leaves the value unchanged. An href is never
    /// removed or blanked.
    pub fn patch(&self, anchor: &dyn AnchorElement) {
        let Some(current) = anchor.href() else {
            return;
        };
        let rewritten = self.rewriter.rewrite(&current, &self.base);
        if rewritten != current {
            anchor.set_href(&rewritten);
        }
    }
}

impl AdditionObserver for LinkPatcher {
    fn on_added(&self, batch: &[Arc<dyn AddedNode>]) {
        for node in batch {
            if let Some(anchor) = node.as_anchor() {
                self.patch(anchor.as_ref());
            } else {
                for anchor in node.descendant_anchors() {
                    self.patch(anchor.as_ref());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tagalong_params::ParamStore;

    struct FakeAnchor {
        href: Mutex<Option<String>>,
        writes: AtomicUsize,
    }

    impl FakeAnchor {
        fn new(href: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                href: Mutex::new(href.map(str::to_owned)),
                writes: AtomicUsize::new(0),
            })
        }

        fn current(&self) -> Option<String> {
            self.href.lock().clone()
        }

        fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    impl AnchorElement for FakeAnchor {
        fn href(&self) -> Option<String> {
            self.href.lock().clone()
        }

        fn set_href(&self, value: &str) {
            *self.href.lock() = Some(value.to_owned());
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FakeNode {
        anchor: Option<Arc<FakeAnchor>>,
        descendants: Vec<Arc<FakeAnchor>>,
    }

    impl AddedNode for FakeNode {
        fn as_anchor(&self) -> Option<Arc<dyn AnchorElement>> {
            self.anchor
                .as_ref()
                .map(|a| Arc::clone(a) as Arc<dyn AnchorElement>)
        }

        fn descendant_anchors(&self) -> Vec<Arc<dyn AnchorElement>> {
            self.descendants
                .iter()
                .map(|a| Arc::clone(a) as Arc<dyn AnchorElement>)
                .collect()
        }
    }

    fn patcher() -> LinkPatcher {
        let initial = Url::parse("https://site.example/?token=abc123").unwrap();
        let store = Arc::new(ParamStore::capture(&initial));
        LinkPatcher::new(
            UrlRewriter::new(store),
            Url::parse("https://site.example/").unwrap(),
        )
    }

    #[test]
    fn patch_rewrites_relative_href() {
        let anchor = FakeAnchor::new(Some("/pricing"));
        patcher().patch(anchor.as_ref());

        assert_eq!(
            anchor.current().as_deref(),
            Some("https://site.example/pricing?token=abc123")
        );
        assert_eq!(anchor.write_count(), 1);
    }

    #[test]
    fn patch_skips_write_when_unchanged() {
        let anchor = FakeAnchor::new(Some("/pricing?token=override"));
        patcher().patch(anchor.as_ref());

        assert_eq!(anchor.current().as_deref(), Some("/pricing?token=override"));
        assert_eq!(anchor.write_count(), 0);
    }

    #[test]
    fn patch_leaves_unparsable_href_alone() {
        let anchor = FakeAnchor::new(Some("not a url"));
        patcher().patch(anchor.as_ref());

        assert_eq!(anchor.current().as_deref(), Some("not a url"));
        assert_eq!(anchor.write_count(), 0);
    }

    #[test]
    fn patch_skips_anchor_without_href() {
        let anchor = FakeAnchor::new(None);
        patcher().patch(anchor.as_ref());

        assert_eq!(anchor.current(), None);
        assert_eq!(anchor.write_count(), 0);
    }

    #[test]
    fn patch_never_touches_mailto() {
        let anchor = FakeAnchor::new(Some("mailto:a@b.com"));
        patcher().patch(anchor.as_ref());

        assert_eq!(anchor.current().as_deref(), Some("mailto:a@b.com"));
        assert_eq!(anchor.write_count(), 0);
    }

    #[test]
    fn on_added_patches_direct_anchor_node() {
        let anchor = FakeAnchor::new(Some("/signup"));
        let node: Arc<dyn AddedNode> = Arc::new(FakeNode {
            anchor: Some(Arc::clone(&anchor)),
            descendants: vec![],
        });

        patcher().on_added(&[node]);

        assert_eq!(
            anchor.current().as_deref(),
            Some("https://site.example/signup?token=abc123")
        );
    }

    #[test]
    fn on_added_scans_container_subtree() {
        let first = FakeAnchor::new(Some("/a"));
        let second = FakeAnchor::new(Some("/b"));
        let node: Arc<dyn AddedNode> = Arc::new(FakeNode {
            anchor: None,
            descendants: vec![Arc::clone(&first), Arc::clone(&second)],
        });

        patcher().on_added(&[node]);

        assert_eq!(
            first.current().as_deref(),
            Some("https://site.example/a?token=abc123")
        );
        assert_eq!(
            second.current().as_deref(),
            Some("https://site.example/b?token=abc123")
        );
    }

    #[test]
    fn redelivery_of_same_node_writes_once() {
        let anchor = FakeAnchor::new(Some("/signup"));
        let node: Arc<dyn AddedNode> = Arc::new(FakeNode {
            anchor: Some(Arc::clone(&anchor)),
            descendants: vec![],
        });

        let p = patcher();
        p.on_added(std::slice::from_ref(&node));
        p.on_added(std::slice::from_ref(&node));

        assert_eq!(anchor.write_count(), 1);
    }
}
