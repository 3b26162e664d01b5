//! ResQ Metrics - compression metrics extraction
//!
//! Turns a stream of landmark frames into per-frame CPR metrics:
//! - Compression detection with debounce (events + depth estimate)
//! - Sliding-window compression rate
//! - Hand-position classification
//! - One immutable metrics snapshot per analyzed frame

pub mod analyzer;
pub mod detector;
pub mod history;
pub mod position;
pub mod rate;
pub mod snapshot;

pub use analyzer::*;
pub use detector::*;
pub use history::*;
pub use position::*;
pub use rate::*;
pub use snapshot::*;
