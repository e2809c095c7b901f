//! Errors surfaced by role capability checks.

use thiserror::Error;

/// Failure raised while evaluating a role's spend capability.
///
/// The probe never retries or remaps these: a failed check aborts the whole
/// discovery and the caller decides how to report it. Substituting a stale or
/// zero limit on failure is a correctness bug, not a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The role's permission data could not be read.
    #[error("permission data unavailable: {0}")]
    Unavailable(String),
    /// The check itself ran but reported a failure.
    #[error("permission check failed: {0}")]
    CheckFailed(String),
}
