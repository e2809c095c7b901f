//! Spending Limit Discovery Example
//!
//! This example demonstrates discovering the spending limit of wallet roles:
//! - An unrestricted role (effectively unlimited)
//! - A role with a lamport-capped SOL permission
//! - A role with no spend permission at all
//!
//! The roles here are in-memory stand-ins for the role objects a wallet SDK
//! reports; the probe only ever sees their two capability checks.
//!
//! Run with: `cargo run --example spending_limit`

use rand::Rng;
use solana_sdk::pubkey::Pubkey;
use swig_limit_probe::{
    CapabilityError, DEFAULT_PROBE_BOUND, SpendCheck, SpendLimit, discover_limit,
};

/// What a role is allowed to do with SOL, as far as the probe can observe.
enum SpendPermission {
    /// Unrestricted access.
    All,
    /// Transfers allowed up to a lamport cap.
    Sol { amount: u64 },
    /// No spend permission.
    None,
}

struct Role {
    id: [u8; 32],
    authority: Pubkey,
    permission: SpendPermission,
}

impl SpendCheck for Role {
    fn can_spend(&self) -> bool {
        !matches!(self.permission, SpendPermission::None)
    }

    fn can_spend_amount(&self, amount: u64) -> Result<bool, CapabilityError> {
        Ok(match self.permission {
            SpendPermission::All => true,
            SpendPermission::Sol { amount: cap } => amount <= cap,
            SpendPermission::None => false,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // =========================================================================
    // 1. BUILD SOME ROLES
    // =========================================================================
    println!("=== Roles ===");

    let roles = vec![
        Role {
            id: rand::thread_rng().r#gen(),
            authority: Pubkey::new_unique(),
            permission: SpendPermission::All,
        },
        Role {
            id: rand::thread_rng().r#gen(),
            authority: Pubkey::new_unique(),
            permission: SpendPermission::Sol {
                amount: 1_000_000_000, // 1 SOL
            },
        },
        Role {
            id: rand::thread_rng().r#gen(),
            authority: Pubkey::new_unique(),
            permission: SpendPermission::Sol {
                amount: 123_456_789, // an awkward cap, still found exactly
            },
        },
        Role {
            id: rand::thread_rng().r#gen(),
            authority: Pubkey::new_unique(),
            permission: SpendPermission::None,
        },
    ];

    for role in &roles {
        println!("Role {}: authority {}", hex::encode(role.id), role.authority);
    }

    // =========================================================================
    // 2. DISCOVER EACH ROLE'S LIMIT
    // =========================================================================
    println!("\n=== Discovered Limits ===");

    for role in &roles {
        let limit = discover_limit(role, DEFAULT_PROBE_BOUND)?;
        println!("Role {}: {}", hex::encode(role.id), limit);

        match limit {
            SpendLimit::NotPermitted => {}
            SpendLimit::Capped(lamports) => {
                println!("  exact cap: {lamports} lamports");
            }
            SpendLimit::AtLeast(lamports) => {
                println!("  cap not found below {lamports} lamports");
            }
        }
    }

    // =========================================================================
    // 3. RE-RUN AFTER A PERMISSION CHANGE
    // =========================================================================
    // The probe's answer is only valid for the role state it observed. After
    // an authority update (say, the 1 SOL role gets bumped to 2 SOL), run the
    // discovery again rather than reusing the old figure.
    println!("\n=== After Permission Update ===");

    let updated = Role {
        id: roles[1].id,
        authority: roles[1].authority,
        permission: SpendPermission::Sol {
            amount: 2_000_000_000, // 2 SOL
        },
    };
    let limit = discover_limit(&updated, DEFAULT_PROBE_BOUND)?;
    println!("Role {}: {}", hex::encode(updated.id), limit);

    println!("\n=== Done ===");
    Ok(())
}
