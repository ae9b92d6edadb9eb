//! Shared constants for 4-up composition
//!
//! This module centralizes the default ratios and the magic numbers used
//! when drawing the decoration overlay.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Default Layout Ratios
// =============================================================================

/// Inside (binding) margin as a fraction of the page width
pub const DEFAULT_INSIDE_MARGIN_RATIO: f32 = 0.06;

/// Outside margin as a fraction of the page width
pub const DEFAULT_OUTSIDE_MARGIN_RATIO: f32 = 0.0;

/// Gap between the two columns as a fraction of the page width
pub const DEFAULT_COLUMN_SPACING_RATIO: f32 = 0.0095;

/// Gap between the two rows as a fraction of the page height
pub const DEFAULT_ROW_SPACING_RATIO: f32 = 0.03;

/// Top margin divided by bottom margin
pub const DEFAULT_TOP_TO_BOTTOM_RATIO: f32 = 0.75;

// =============================================================================
// Sheet Structure
// =============================================================================

/// Source pages placed on one composed sheet
pub const PAGES_PER_SHEET: usize = 4;

/// Logical pages per binding-side period (two sheets)
pub const PAGES_PER_SIDE_PERIOD: usize = 8;

// =============================================================================
// Decoration Overlay
// =============================================================================

/// Separator line width (0.1 mm)
pub const SEPARATOR_LINE_WIDTH_MM: f32 = 0.1;

/// Separator line color (RGB, 0.0..=1.0)
pub const SEPARATOR_LINE_COLOR: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// The separator extends past the quadrants by this fraction of the
/// vertical margin slack, at both ends.
pub const SEPARATOR_OVERHANG_FRACTION: f32 = 1.0 / 20.0;

/// Page-number baseline as a fraction of the bottom margin
pub const PAGE_NUMBER_BASELINE_FRACTION: f32 = 0.3;

/// Page-number font (one of the standard 14 PDF fonts)
pub const PAGE_NUMBER_FONT: &str = "Helvetica";

/// Page-number font size (points)
pub const PAGE_NUMBER_FONT_SIZE: f32 = 10.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;
