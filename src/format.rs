//! Human-readable rendering of discovered limits.
//!
//! All probe arithmetic stays in lamports; conversion to decimal SOL happens
//! only here, in integer arithmetic, so amounts above 2^53 lamports do not
//! lose precision the way an `f64` division would.

use std::fmt;

use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::authority::SpendLimit;
use crate::probe::ProbedLimit;

/// Render a lamport amount as a decimal SOL string, trailing zeros trimmed.
pub fn lamports_to_sol_display(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;
    if frac == 0 {
        return whole.to_string();
    }
    let fixed = format!("{whole}.{frac:09}");
    fixed.trim_end_matches('0').to_string()
}

impl fmt::Display for SpendLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPermitted => write!(f, "no spend permission"),
            Self::Capped(amount) => write!(f, "{} SOL", lamports_to_sol_display(*amount)),
            Self::AtLeast(amount) => write!(
                f,
                "at least {} SOL (effectively unlimited)",
                lamports_to_sol_display(*amount)
            ),
        }
    }
}

impl fmt::Display for ProbedLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Denied => write!(f, "nothing spendable"),
            Self::Exact(amount) => write!(f, "{} SOL", lamports_to_sol_display(*amount)),
            Self::AtLeast(amount) => write!(
                f,
                "at least {} SOL (effectively unlimited)",
                lamports_to_sol_display(*amount)
            ),
        }
    }
}
