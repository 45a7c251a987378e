//! Application state engine for the civica dashboard
//!
//! The single authoritative in-memory store behind every screen: issues,
//! comments, votes, and the user session, plus the pure projection
//! functions (search, category set, status tab, ownership scope) the
//! screens read from, and a best-effort local persistence adapter.
//!
//! Screens dispatch mutations, the store updates atomically and mirrors a
//! whitelisted slice of its state to the persistence sink, and derived
//! views are recomputed from snapshots on every read.

pub mod filter;
pub mod persist;
pub mod session;
pub mod stats;
pub mod store;

pub use filter::*;
pub use persist::*;
pub use session::*;
pub use stats::*;
pub use store::*;
