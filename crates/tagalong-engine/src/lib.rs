//! Tagalong Engine - Attribution parameter propagation
//!
//! The page-load entry point that wires everything together:
//! - captures the allowed parameters from the initial URL exactly once,
//! - rewrites every anchor currently in the document,
//! - subscribes to structural additions so late-rendered anchors are
//!   rewritten too,
//! - installs the navigation interception hooks.
//!
//! When the initial URL carries none of the allowed keys the engine goes
//! dormant: nothing is scanned, observed, or installed, and the page
//! behaves exactly as if the engine were absent.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tagalong_engine::activate;
//! use tagalong_nav::NavigationHooks;
//!
//! let document: Arc<dyn tagalong_dom::DocumentHost> = embedding_document();
//! let hooks = NavigationHooks::new(embedding_navigator());
//!
//! let activation = activate(&document, &hooks);
//! // Route all programmatic navigation through `hooks` from here on.
//! ```

pub mod engine;

pub use engine::{activate, Activation};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for embedding the engine
    pub use crate::{activate, Activation};
    pub use tagalong_dom::{AdditionObserver, AnchorElement, DocumentHost, LinkPatcher};
    pub use tagalong_nav::{NavigationHooks, NavigationHost};
    pub use tagalong_params::{ParamStore, ALLOWED_KEYS};
    pub use tagalong_rewrite::UrlRewriter;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
