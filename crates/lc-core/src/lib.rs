//! # lc-core
//!
//! Error types and shared aliases for lunarcal-rs.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error enum, the `Result` alias, the `ensure!` macro,
//! and a couple of primitive type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ────────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year, solar or lunar.
pub type Year = u16;

/// A raw duration tick count in nanoseconds, the smallest supported unit.
pub type Ticks = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
