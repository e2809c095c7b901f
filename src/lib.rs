//! Spending-limit discovery for Swig wallet roles.
//!
//! A Swig role reports whether it may spend a given number of lamports, but
//! not the cap itself. This crate recovers the cap by binary search over that
//! monotonic permission check, and renders the result for display.
//!
//! The wallet SDK, RPC client, and UI stay on the other side of a narrow
//! boundary: everything a caller supplies is either a `FnMut(u64) -> bool`
//! style predicate ([`probe`]) or a [`SpendCheck`] role value ([`authority`]).
//!
//! ```
//! use swig_limit_probe::{max_spendable, ProbedLimit};
//!
//! // Role may spend up to 5 SOL.
//! let limit = max_spendable(|lamports| lamports <= 5_000_000_000, 100_000_000_000);
//! assert_eq!(limit, ProbedLimit::Exact(5_000_000_000));
//! ```

// Public modules
pub mod authority;
pub mod error;
pub mod format;
pub mod probe;

// Re-exports for convenient public API
pub use authority::{DEFAULT_PROBE_BOUND, SpendCheck, SpendLimit, discover_limit};
pub use error::CapabilityError;
pub use probe::{ProbedLimit, max_spendable, max_spendable_async, try_max_spendable};
