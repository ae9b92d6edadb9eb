//! Layout calculation modules for 4-up composition
//!
//! This module handles all the geometric calculations:
//! - Placement geometry (quadrant size, offsets, margins)
//! - Sheet planning (which source page goes into which quadrant)

mod geometry;
mod sheet;
mod types;

pub use geometry::*;
pub use sheet::*;
pub use types::*;
