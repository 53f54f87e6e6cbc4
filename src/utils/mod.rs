//! Low-level helpers shared by the generators.

pub mod bits;
pub mod converter;
