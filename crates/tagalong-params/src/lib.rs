//! Tagalong Params - Capture policy for attribution parameters
//!
//! Defines:
//! - The static allowlist of query-parameter names eligible for propagation
//! - [`ParamStore`], the write-once snapshot captured from the initial URL
//!
//! The store is read-only input to the rewriting rule: nothing downstream
//! ever mutates it, and an empty store deactivates the whole engine.

pub mod keys;
pub mod store;

pub use keys::ALLOWED_KEYS;
pub use store::ParamStore;
