//! Type-safe wrappers for team and player identifiers.

pub mod ids;
