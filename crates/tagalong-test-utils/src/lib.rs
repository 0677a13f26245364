//! Tagalong Test Utils - In-memory hosts for exercising the engine
//!
//! Provides:
//! - [`MemoryDocument`] / [`MemoryAnchor`] / [`MemoryNode`]: a document
//!   host whose mutation batches are delivered explicitly via
//!   [`MemoryDocument::pump`], modeling the asynchronous microtask
//!   batching of a real change-notification facility
//! - [`RecordingNavigator`]: a [`NavigationHost`] that records every
//!   delegated call with its arguments as received
//!
//! Nothing here appears in production paths; the engine only sees the
//! collaborator traits.

use parking_lot::Mutex;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tagalong_dom::{AddedNode, AdditionObserver, AnchorElement, DocumentHost};
use tagalong_nav::NavigationHost;
use url::Url;

/// In-memory hyperlink element with write counting.
pub struct MemoryAnchor {
    href: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemoryAnchor {
    /// Anchor carrying an `href` attribute.
    #[must_use]
    pub fn new(href: &str) -> Arc<Self> {
        Arc::new(Self {
            href: Mutex::new(Some(href.to_owned())),
            writes: AtomicUsize::new(0),
        })
    }

    /// Anchor without an `href` attribute.
    #[must_use]
    pub fn without_href() -> Arc<Self> {
        Arc::new(Self {
            href: Mutex::new(None),
            writes: AtomicUsize::new(0),
        })
    }

    /// Current attribute value.
    #[must_use]
    pub fn current_href(&self) -> Option<String> {
        self.href.lock().clone()
    }

    /// How many attribute writes this anchor has received.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl AnchorElement for MemoryAnchor {
    fn href(&self) -> Option<String> {
        self.href.lock().clone()
    }

    fn set_href(&self, value: &str) {
        *self.href.lock() = Some(value.to_owned());
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

/// A node reported by the in-memory mutation facility.
pub struct MemoryNode {
    anchor: Option<Arc<MemoryAnchor>>,
    descendants: Vec<Arc<MemoryAnchor>>,
}

impl MemoryNode {
    /// A node that is itself a hyperlink element.
    #[must_use]
    pub fn anchor(anchor: Arc<MemoryAnchor>) -> Self {
        Self {
            anchor: Some(anchor),
            descendants: Vec::new(),
        }
    }

    /// A container node with hyperlink elements somewhere beneath it.
    #[must_use]
    pub fn container(descendants: Vec<Arc<MemoryAnchor>>) -> Self {
        Self {
            anchor: None,
            descendants,
        }
    }

    fn all_anchors(&self) -> Vec<Arc<MemoryAnchor>> {
        self.anchor
            .iter()
            .chain(self.descendants.iter())
            .map(Arc::clone)
            .collect()
    }
}

impl AddedNode for MemoryNode {
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

/// In-memory document host.
///
/// Insertions are queued and only reach observers when [`pump`] runs,
/// so tests can assert on the window between insertion and delivery.
///
/// [`pump`]: MemoryDocument::pump
pub struct MemoryDocument {
    base: Url,
    anchors: Mutex<Vec<Arc<MemoryAnchor>>>,
    observers: Mutex<Vec<Arc<dyn AdditionObserver>>>,
    pending: Mutex<Vec<Arc<dyn AddedNode>>>,
}

impl MemoryDocument {
    /// Document located at `base`.
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            base,
            anchors: Mutex::new(Vec::new()),
            observers: Mutex::new(Vec::new()),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Attach an anchor as part of the initial markup (present before any
    /// scan; never reported as a mutation).
    pub fn add_initial_anchor(&self, href: &str) -> Arc<MemoryAnchor> {
        let anchor = MemoryAnchor::new(href);
        self.anchors.lock().push(Arc::clone(&anchor));
        anchor
    }

    /// Insert a node after load. Its anchors become part of the document
    /// immediately; observers hear about it on the next [`pump`].
    ///
    /// [`pump`]: MemoryDocument::pump
    pub fn insert(&self, node: MemoryNode) {
        self.anchors.lock().extend(node.all_anchors());
        self.pending.lock().push(Arc::new(node) as Arc<dyn AddedNode>);
    }

    /// Deliver all queued insertions to every observer as one batch.
    pub fn pump(&self) {
        let batch: Vec<Arc<dyn AddedNode>> = self.pending.lock().drain(..).collect();
        if batch.is_empty() {
            return;
        }
        for observer in self.observers.lock().iter() {
            observer.on_added(&batch);
        }
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }
}

impl DocumentHost for MemoryDocument {
    fn base_url(&self) -> Url {
        self.base.clone()
    }

    fn anchors(&self) -> Vec<Arc<dyn AnchorElement>> {
        self.anchors
            .lock()
            .iter()
            .map(|a| Arc::clone(a) as Arc<dyn AnchorElement>)
            .collect()
    }

    fn observe_additions(&self, observer: Arc<dyn AdditionObserver>) {
        self.observers.lock().push(observer);
    }
}

/// One call delegated to the raw navigator, arguments as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCall {
    /// Navigate keeping the current history entry.
    Assign(String),
    /// Navigate replacing the current history entry.
    Replace(String),
    /// Direct location assignment.
    SetLocation(String),
    /// New browsing context.
    Open {
        /// Target URL after interception.
        url: String,
        /// Frame name, passed through.
        target: Option<String>,
        /// Window features, passed through.
        features: Option<String>,
    },
    /// History push.
    PushState {
        /// State value, passed through.
        state: Value,
        /// Title, passed through.
        title: String,
        /// URL after interception, `None` when absent.
        url: Option<String>,
    },
    /// History replace.
    ReplaceState {
        /// State value, passed through.
        state: Value,
        /// Title, passed through.
        title: String,
        /// URL after interception, `None` when absent.
        url: Option<String>,
    },
}

/// [`NavigationHost`] that records every call instead of navigating.
pub struct RecordingNavigator {
    location: String,
    calls: Mutex<Vec<NavCall>>,
}

impl RecordingNavigator {
    /// Navigator reporting `location` as the current navigable location.
    #[must_use]
    pub fn new(location: &str) -> Arc<Self> {
        Arc::new(Self {
            location: location.to_owned(),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Everything delegated so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<NavCall> {
        self.calls.lock().clone()
    }

    /// The most recent delegated call.
    #[must_use]
    pub fn last_call(&self) -> Option<NavCall> {
        self.calls.lock().last().cloned()
    }
}

impl NavigationHost for RecordingNavigator {
    fn assign(&self, url: &str) {
        self.calls.lock().push(NavCall::Assign(url.to_owned()));
    }

    fn replace(&self, url: &str) {
        self.calls.lock().push(NavCall::Replace(url.to_owned()));
    }

    fn set_location(&self, url: &str) {
        self.calls.lock().push(NavCall::SetLocation(url.to_owned()));
    }

    fn location(&self) -> String {
        self.location.clone()
    }

    fn open(&self, url: &str, target: Option<&str>, features: Option<&str>) {
        self.calls.lock().push(NavCall::Open {
            url: url.to_owned(),
            target: target.map(str::to_owned),
            features: features.map(str::to_owned),
        });
    }

    fn push_state(&self, state: &Value, title: &str, url: Option<&str>) {
        self.calls.lock().push(NavCall::PushState {
            state: state.clone(),
            title: title.to_owned(),
            url: url.map(str::to_owned),
        });
    }

    fn replace_state(&self, state: &Value, title: &str, url: Option<&str>) {
        self.calls.lock().push(NavCall::ReplaceState {
            state: state.clone(),
            title: title.to_owned(),
            url: url.map(str::to_owned),
        });
    }
}
