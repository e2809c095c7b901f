//! Async Probe Example
//!
//! This example demonstrates probing a spend capability whose checks resolve
//! asynchronously, the way a permission check backed by an RPC node would.
//! The probe awaits each check before choosing the next amount, so the
//! search stays strictly serialized.
//!
//! Run with: `cargo run --example async_probe`

use std::time::Duration;

use swig_limit_probe::{CapabilityError, DEFAULT_PROBE_BOUND, ProbedLimit, max_spendable_async};

/// A role whose permission data lives behind a network hop.
struct RemoteRole {
    cap: u64,
}

impl RemoteRole {
    async fn can_spend_amount(&self, amount: u64) -> Result<bool, CapabilityError> {
        // Simulated RPC latency per check.
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok(amount <= self.cap)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // =========================================================================
    // 1. PROBE A REMOTE-BACKED ROLE
    // =========================================================================
    println!("=== Probing Remote Role ===");

    let role = RemoteRole {
        cap: 5_000_000_000, // 5 SOL
    };

    let limit =
        max_spendable_async(|amount| role.can_spend_amount(amount), DEFAULT_PROBE_BOUND).await?;
    println!("Discovered limit: {limit}");

    // =========================================================================
    // 2. A ROLE WITH NO CAP BELOW THE BOUND
    // =========================================================================
    println!("\n=== Probing Uncapped Role ===");

    let whale = RemoteRole { cap: u64::MAX };
    let limit =
        max_spendable_async(|amount| whale.can_spend_amount(amount), DEFAULT_PROBE_BOUND).await?;
    println!("Discovered limit: {limit}");
    assert!(matches!(limit, ProbedLimit::AtLeast(_)));

    // =========================================================================
    // 3. A CHECK THAT FAILS MID-SEARCH
    // =========================================================================
    // A failing check aborts the whole probe; there is no partial answer to
    // fall back on. Report the failure instead of showing a stale limit.
    println!("\n=== Failing Check ===");

    let result = max_spendable_async(
        |_amount| async {
            Err::<bool, _>(CapabilityError::Unavailable("node unreachable".into()))
        },
        DEFAULT_PROBE_BOUND,
    )
    .await;

    match result {
        Ok(limit) => println!("Discovered limit: {limit}"),
        Err(err) => println!("Could not determine limit: {err}"),
    }

    println!("\n=== Done ===");
    Ok(())
}
