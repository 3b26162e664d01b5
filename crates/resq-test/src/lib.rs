//! ResQ Test Harness - scripted sessions and pipeline validation
//!
//! This crate provides:
//! - Pose script builders (synthetic compression motion)
//! - A scripted pipeline simulator with full output traces
//! - Session-level drivers (scripted source, recording sink, manual clock)
//! - End-to-end scenario tests and benchmarks

pub mod integration;
pub mod script;
pub mod simulator;

pub use integration::*;
pub use script::*;
pub use simulator::*;
