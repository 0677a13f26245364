//! Collaborator traits over the host document.

use std::sync::Arc;
use url::Url;

/// A hyperlink-bearing element owned by the host document.
pub trait AnchorElement: Send + Sync {
    /// Current `href` attribute, if the element has one.
    fn href(&self) -> Option<String>;

    /// Replace the `href` attribute.
    fn set_href(&self, value: &str);
}

/// An element reported as added by the host's mutation facility.
pub trait AddedNode: Send + Sync {
    /// The node itself, when it is a hyperlink element.
    fn as_anchor(&self) -> Option<Arc<dyn AnchorElement>>;

    /// Hyperlink elements in the node's descendant subtree, exclusive of
    /// the node itself.
    fn descendant_anchors(&self) -> Vec<Arc<dyn AnchorElement>>;
}

/// Receiver for batches of structural additions.
///
/// Delivery is push-based and asynchronous relative to insertion:
/// the host batches changes and delivers them later, at least once, with
/// no ordering guarantee beyond "observed after insertion".
pub trait AdditionObserver: Send + Sync {
    /// Called with each batch of nodes added since the previous delivery.
    fn on_added(&self, batch: &[Arc<dyn AddedNode>]);
}

/// Traversal and observation capabilities of the host document.
pub trait DocumentHost: Send + Sync {
    /// Absolute URL the document resolves relative targets against.
    ///
    /// At activation this is also the initial URL whose query string the
    /// parameter snapshot is captured from.
    fn base_url(&self) -> Url;

    /// Every hyperlink element currently attached to the document.
    fn anchors(&self) -> Vec<Arc<dyn AnchorElement>>;

    /// Subscribe `observer` to additions anywhere in the document subtree.
    ///
    /// The subscription lives for the document's lifetime; there is no
    /// unsubscribe operation.
    fn observe_additions(&self, observer: Arc<dyn AdditionObserver>);
}
