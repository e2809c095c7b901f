//! Swig Limit Probe
//!
//! Discovers the spending limit of a Swig wallet role by binary search over
//! its permission checks. Each example can be run independently with
//! `cargo run --example <name>`.
//!
//! Available examples:
//!
//! - `spending_limit`: Discover the limits of capped, uncapped, and
//!   unpermissioned roles
//! - `async_probe`: Probe a role whose permission checks resolve
//!   asynchronously
//!
//! # Quick Start
//!
//! ```bash
//! # Discover limits for a set of mock roles
//! cargo run --example spending_limit
//!
//! # Probe an async (RPC-style) permission check
//! cargo run --example async_probe
//! ```

fn main() {
    println!("Swig Limit Probe Examples");
    println!("=========================");
    println!();
    println!("Available examples:");
    println!();
    println!("  cargo run --example spending_limit");
    println!("    Discover the limits of capped, uncapped, and unpermissioned roles");
    println!();
    println!("  cargo run --example async_probe");
    println!("    Probe a role whose permission checks resolve asynchronously");
}
