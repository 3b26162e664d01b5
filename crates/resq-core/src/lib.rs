//! ResQ Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the ResQ coaching
//! pipeline:
//! - Body landmarks and normalized points
//! - Monotonic time primitives (MonoTime)
//! - Error taxonomy
//! - CPR guideline targets

pub mod error;
pub mod landmark;
pub mod targets;
pub mod time;

pub use error::*;
pub use landmark::*;
pub use time::*;
