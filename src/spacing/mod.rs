//! Gap allocation between digit glyphs

/// Spacing policies and the gap allocator
pub mod allocator;
/// Enumeration and counting of bounded integer compositions
pub mod composition;
/// Width feasibility checks and the spacing range type
pub mod feasibility;

pub use allocator::{SpacingAllocator, SpacingMethod, gap_fillers};
pub use feasibility::{FeasibleWidth, SpacingRange, available_space};
