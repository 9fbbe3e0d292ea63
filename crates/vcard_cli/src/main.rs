//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `vcard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("vcard_core ping={}", vcard_core::ping());
    println!("vcard_core version={}", vcard_core::core_version());
}
