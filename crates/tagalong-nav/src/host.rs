//! Raw navigation primitives owned by the embedding.

use serde_json::Value;

/// The pre-existing navigation behavior the engine wraps.
///
/// Implementations perform the actual navigation; the engine never
/// reimplements them, it only rewrites URL arguments on the way through.
/// URL parameters are typed `&str`, so the "non-string arguments are not
/// intercepted" rule of the dynamic original holds by construction.
pub trait NavigationHost: Send + Sync {
    /// Navigate to `url`, keeping the current history entry.
    fn assign(&self, url: &str);

    /// Navigate to `url`, replacing the current history entry.
    fn replace(&self, url: &str);

    /// Assign the current navigable location directly (setter semantics).
    fn set_location(&self, url: &str);

    /// Read the current navigable location.
    ///
    /// The read side is never rewritten; interception passes it through.
    fn location(&self) -> String;

    /// Open a new browsing context at `url`.
    ///
    /// `target` (frame name) and `features` pass through interception
    /// unmodified.
    fn open(&self, url: &str, target: Option<&str>, features: Option<&str>);

    /// Push a history entry. A `None` URL means "no navigation" and is
    /// left as-is by interception; `state` and `title` always pass
    /// through unmodified.
    fn push_state(&self, state: &Value, title: &str, url: Option<&str>);

    /// Replace the current history entry. Same URL/state/title rules as
    /// [`NavigationHost::push_state`].
    fn replace_state(&self, state: &Value, title: &str, url: Option<&str>);
}
