//! Tagalong Rewrite - The pure URL-rewriting rule
//!
//! Provides [`UrlRewriter`], which injects captured attribution parameters
//! into candidate navigation targets. Core guarantees:
//! - Non-override: an existing query value always wins over the stored one
//! - Idempotence: rewriting twice equals rewriting once
//! - Fail-open: anything unrewritable comes back byte-for-byte unchanged
//!
//! Both the link patcher and the navigation interceptor route every
//! outgoing URL through this crate; neither adds rewriting rules of its
//! own.

pub mod rewriter;
pub mod scheme;

pub use rewriter::UrlRewriter;
pub use scheme::is_navigable_scheme;
