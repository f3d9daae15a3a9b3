//! Concrete [`crate::converter::LunarConverter`] implementations.

/// Chinese lunisolar table, 1900–2100.
pub mod chinese;

pub use chinese::ChineseLunisolar;
