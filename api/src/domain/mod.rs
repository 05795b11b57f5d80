//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for storage

pub mod entities;
pub mod ports;
