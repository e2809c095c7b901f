//! Capability view of an external authority role.
//!
//! The wallet SDK's role objects are duck-typed from the probe's point of
//! view: some roles carry an amount-bounded spend check, some carry none.
//! [`SpendCheck`] pins that down to the two calls the discovery flow needs,
//! and [`discover_limit`] is the flow itself: existence check first, bounded
//! probe only when it passes.

use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::error::CapabilityError;
use crate::probe::{ProbedLimit, try_max_spendable};

/// Default search ceiling: 100 SOL in lamports.
///
/// Caps above this are reported as [`SpendLimit::AtLeast`] rather than an
/// exact figure.
pub const DEFAULT_PROBE_BOUND: u64 = 100 * LAMPORTS_PER_SOL;

/// A role's spend capability, reduced to the pair of checks the probe uses.
pub trait SpendCheck {
    /// Zero-arity existence check: does this role have a spend capability at
    /// all, independent of amount?
    fn can_spend(&self) -> bool;

    /// Amount-bounded check: may this role spend `amount` lamports?
    ///
    /// Must be monotonic non-increasing in `amount` and side-effect free.
    fn can_spend_amount(&self, amount: u64) -> Result<bool, CapabilityError>;
}

/// A role's spending limit as discovered by [`discover_limit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendLimit {
    /// The role has no spend capability, or refuses every amount.
    NotPermitted,
    /// The role may spend up to exactly this many lamports.
    Capped(u64),
    /// The check still passed at the search ceiling; the real cap is at
    /// least this. Treated as effectively unlimited for display purposes.
    AtLeast(u64),
}

impl SpendLimit {
    /// The discovered amount in lamports, when the role can spend at all.
    pub fn lamports(&self) -> Option<u64> {
        match self {
            Self::Capped(amount) | Self::AtLeast(amount) => Some(*amount),
            Self::NotPermitted => None,
        }
    }

    /// True when the probe could not find an upper edge within its bound.
    pub fn is_effectively_unlimited(&self) -> bool {
        matches!(self, Self::AtLeast(_))
    }
}

/// Discover `check`'s spending limit within `[0, upper_bound]` lamports.
///
/// Runs the zero-arity existence check before the bounded probe, so roles
/// without a spend capability never pay for a binary search. A failing
/// `can_spend_amount` aborts the discovery with that error.
pub fn discover_limit<C>(check: &C, upper_bound: u64) -> Result<SpendLimit, CapabilityError>
where
    C: SpendCheck + ?Sized,
{
    if !check.can_spend() {
        return Ok(SpendLimit::NotPermitted);
    }

    let probed = try_max_spendable(|amount| check.can_spend_amount(amount), upper_bound)?;
    Ok(match probed {
        ProbedLimit::Denied => SpendLimit::NotPermitted,
        ProbedLimit::Exact(amount) => SpendLimit::Capped(amount),
        ProbedLimit::AtLeast(amount) => SpendLimit::AtLeast(amount),
    })
}
