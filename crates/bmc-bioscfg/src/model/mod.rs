//! `serde` data structures that map directly to each vendor's export schema.
//!
//! These structs double as the in-memory documents the adapters edit. Field
//! names follow Rust conventions; the `serde` renames carry the vendor
//! spelling (`@name` vs `@Name`, `selectedOption`, `FQDD`, ...).

#![allow(clippy::pedantic)] // Vendor schema naming conventions differ from Rust

pub mod asrockrack;
pub mod dell;
pub mod dell_json;
pub mod supermicro;
