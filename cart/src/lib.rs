//! # Cart
//!
//! Cart state shared by the two storefront page contexts: the product-detail
//! page appends and merges lines, the cart page edits and checks out. Both
//! operate on one persisted record with no server authority.
//!
//! # Synchronization contract
//!
//! - Every read normalizes: the persisted record is an untrusted boundary and
//!   may be absent, malformed, or the wrong shape at any time. `load` never
//!   fails; it degrades to an empty cart and warns.
//! - Every write is total: a failed write is logged and swallowed, leaving
//!   the in-memory cart authoritative for the current page lifetime.
//! - Cross-context writes are last-write-wins. Checkout mitigates staleness
//!   by re-reading immediately before formatting, nothing stronger.

pub mod checkout;
pub mod error;
pub mod format;
pub mod model;
pub mod store;
