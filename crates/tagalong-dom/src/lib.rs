//! Tagalong DOM - Host-document surface and anchor patching
//!
//! Provides:
//! - The collaborator traits the embedding implements over its document
//!   representation ([`DocumentHost`], [`AnchorElement`], [`AddedNode`],
//!   [`AdditionObserver`])
//! - [`LinkPatcher`], which rewrites anchor targets in place for the
//!   initial document and for every element added afterward
//!
//! The engine never owns a DOM. Document traversal and change
//! notification are pre-existing host behavior to be consumed, not
//! reimplemented.

pub mod host;
pub mod patcher;

pub use host::{AddedNode, AdditionObserver, AnchorElement, DocumentHost};
pub use patcher::LinkPatcher;
