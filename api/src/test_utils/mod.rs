//! Test utilities
//!
//! Fixtures over the in-memory store and manual mocks for unit testing.
//!
//! The in-memory adapters are the real storage, so mocks are only needed to
//! simulate failures the store never produces on its own.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
