//! CPR guideline targets
//!
//! Adult hands-only CPR reference values the coaching bands are built
//! around: 100-120 compressions per minute at 5-6 cm depth.

/// Target compression rate, compressions per minute
pub const TARGET_RATE_CPM: f64 = 100.0;

/// Target compression depth, centimeters
pub const TARGET_DEPTH_CM: f32 = 5.0;
