//! Binary search for the largest amount a spend predicate accepts.
//!
//! The predicate must be monotonic non-increasing: once it refuses an amount,
//! it refuses every larger amount. Swig permission checks have this shape
//! (`Permission::Sol { amount, .. }` allows everything up to its cap), so the
//! cap can be recovered in `O(log bound)` checks instead of one per lamport.

use std::convert::Infallible;
use std::future::Future;

/// Outcome of probing a spend predicate over `[0, upper_bound]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbedLimit {
    /// Largest amount the predicate accepted; the next lamport is refused.
    Exact(u64),
    /// The predicate still held at the search ceiling. The true cap is at
    /// least this, so callers should treat the role as effectively unlimited
    /// rather than capped at the bound.
    AtLeast(u64),
    /// The predicate refused every amount, including zero.
    Denied,
}

impl ProbedLimit {
    /// The discovered amount in lamports, if any amount was spendable.
    pub fn amount(&self) -> Option<u64> {
        match self {
            Self::Exact(amount) | Self::AtLeast(amount) => Some(*amount),
            Self::Denied => None,
        }
    }

    /// True when the search hit its ceiling without finding a refusal.
    pub fn is_at_ceiling(&self) -> bool {
        matches!(self, Self::AtLeast(_))
    }
}

/// Find the largest `amount` in `[0, upper_bound]` for which `allows(amount)`
/// returns `Ok(true)`.
///
/// Requires `allows` to be monotonic non-increasing over its argument; the
/// result is unspecified otherwise. The predicate is called at most
/// `floor(log2(upper_bound + 1)) + 1` times (37 for a 100 SOL bound).
///
/// An `Err` from the predicate aborts the search immediately and is returned
/// unmodified. There is no retry and no partial result: the predicate is
/// expected to be deterministic, so retrying it cannot help.
///
/// If the predicate reads external state (balance, a cached role account),
/// the result is only valid at the instant of the call; re-run the probe
/// after any state change.
pub fn try_max_spendable<F, E>(mut allows: F, upper_bound: u64) -> Result<ProbedLimit, E>
where
    F: FnMut(u64) -> Result<bool, E>,
{
    let mut lo: u64 = 0;
    let mut hi: u64 = upper_bound;
    let mut best: Option<u64> = None;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if allows(mid)? {
            best = Some(mid);
            if mid == upper_bound {
                break;
            }
            lo = mid + 1;
        } else if mid == 0 {
            // Even zero is refused; nothing below to narrow to.
            break;
        } else {
            hi = mid - 1;
        }
    }

    Ok(match best {
        None => ProbedLimit::Denied,
        Some(amount) if amount == upper_bound => ProbedLimit::AtLeast(amount),
        Some(amount) => ProbedLimit::Exact(amount),
    })
}

/// Infallible variant of [`try_max_spendable`] for plain `bool` predicates.
pub fn max_spendable<F>(mut allows: F, upper_bound: u64) -> ProbedLimit
where
    F: FnMut(u64) -> bool,
{
    try_max_spendable::<_, Infallible>(|amount| Ok(allows(amount)), upper_bound)
        .unwrap_or_else(|never| match never {})
}

/// [`try_max_spendable`] for predicates that resolve asynchronously, e.g. a
/// permission check that consults an RPC node.
///
/// Each probe step depends on the previous answer, so the checks are awaited
/// one at a time; there is no speculative parallelism across branches.
pub async fn max_spendable_async<F, Fut, E>(
    mut allows: F,
    upper_bound: u64,
) -> Result<ProbedLimit, E>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let mut lo: u64 = 0;
    let mut hi: u64 = upper_bound;
    let mut best: Option<u64> = None;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if allows(mid).await? {
            best = Some(mid);
            if mid == upper_bound {
                break;
            }
            lo = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            hi = mid - 1;
        }
    }

    Ok(match best {
        None => ProbedLimit::Denied,
        Some(amount) if amount == upper_bound => ProbedLimit::AtLeast(amount),
        Some(amount) => ProbedLimit::Exact(amount),
    })
}
