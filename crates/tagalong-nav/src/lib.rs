//! Tagalong Nav - Interception of imperative navigation
//!
//! Mirrors the link patcher's guarantee for programmatic navigation:
//! - [`NavigationHost`]: the pre-existing primitives the embedding owns
//! - [`NavigationInterceptor`]: decorator that rewrites the URL argument
//!   and delegates everything else unchanged
//! - [`NavigationHooks`]: the one-time installable registry calling code
//!   routes through, superseding direct calls to the raw primitives
//!
//! Installation never double-wraps: the first install wins and later
//! attempts are logged no-ops.

pub mod hooks;
pub mod host;
pub mod interceptor;

pub use hooks::NavigationHooks;
pub use host::NavigationHost;
pub use interceptor::NavigationInterceptor;
