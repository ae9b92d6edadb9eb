//! Placement geometry derived from the page size and layout ratios
//!
//! Everything here is computed once per run. The four quadrants share a
//! single scale factor so they all come out the same size, and the source
//! aspect ratio is preserved.

use crate::constants::{PAGE_NUMBER_BASELINE_FRACTION, SEPARATOR_OVERHANG_FRACTION};
use crate::options::{Margins, Spacing};
use crate::types::{NupError, PageSize, Result};

use super::{BindingSide, Column, Point, Row, SlotPosition, Transform};

/// Absolute placement geometry for one page size, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Size of the source pages and of every output page
    pub page: PageSize,
    pub inside_margin: f32,
    pub outside_margin: f32,
    pub column_spacing: f32,
    pub row_spacing: f32,
    /// Width of one scaled-down page
    pub minor_width: f32,
    /// Height of one scaled-down page
    pub minor_height: f32,
    /// `minor_width / page.width`, applied to both axes
    pub minor_scale: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub odd_left_x: f32,
    pub odd_right_x: f32,
    pub even_left_x: f32,
    pub even_right_x: f32,
    pub upper_y: f32,
    pub lower_y: f32,
}

impl Geometry {
    /// Derive the geometry for `page`.
    ///
    /// Fails with [`NupError::InvalidParameter`] if the margins and spacing
    /// leave no room for the quadrants.
    pub fn derive(page: PageSize, margins: &Margins, spacing: &Spacing) -> Result<Self> {
        if !(page.width.is_finite() && page.width > 0.0)
            || !(page.height.is_finite() && page.height > 0.0)
        {
            return Err(NupError::InvalidParameter {
                parameter: "page_size",
                reason: format!(
                    "page must have a positive size, got {} x {}",
                    page.width, page.height
                ),
            });
        }

        let inside_margin = page.width * margins.inside_ratio;
        let outside_margin = page.width * margins.outside_ratio;
        let column_spacing = page.width * spacing.column_ratio;
        let row_spacing = page.height * spacing.row_ratio;

        let minor_width = (page.width - inside_margin - outside_margin - column_spacing) / 2.0;
        let minor_height = minor_width * page.aspect_ratio();

        if minor_width <= 0.0 || minor_height <= 0.0 {
            return Err(NupError::InvalidParameter {
                parameter: "inside_margin + outside_margin + column_spacing",
                reason: format!(
                    "{} + {} + {} pt leaves no width for the quadrants on a {} pt wide page",
                    inside_margin, outside_margin, column_spacing, page.width
                ),
            });
        }

        let slack = page.height - 2.0 * minor_height - row_spacing;
        if slack < 0.0 {
            return Err(NupError::InvalidParameter {
                parameter: "row_spacing",
                reason: format!(
                    "two {} pt rows plus {} pt spacing exceed the {} pt page height",
                    minor_height, row_spacing, page.height
                ),
            });
        }

        let ratio = margins.top_to_bottom_ratio;
        let margin_top = slack * (ratio / (1.0 + ratio));
        let margin_bottom = slack * (1.0 / (1.0 + ratio));

        Ok(Self {
            page,
            inside_margin,
            outside_margin,
            column_spacing,
            row_spacing,
            minor_width,
            minor_height,
            minor_scale: minor_width / page.width,
            margin_top,
            margin_bottom,
            odd_left_x: inside_margin,
            odd_right_x: inside_margin + minor_width + column_spacing,
            even_left_x: outside_margin,
            even_right_x: outside_margin + minor_width + column_spacing,
            upper_y: margin_bottom + minor_height + row_spacing,
            lower_y: margin_bottom,
        })
    }

    /// Vertical space not taken by the quadrants and the row gap
    pub fn vertical_slack(&self) -> f32 {
        self.margin_top + self.margin_bottom
    }

    pub fn column_x(&self, column: Column, side: BindingSide) -> f32 {
        match (column, side) {
            (Column::Left, BindingSide::Odd) => self.odd_left_x,
            (Column::Right, BindingSide::Odd) => self.odd_right_x,
            (Column::Left, BindingSide::Even) => self.even_left_x,
            (Column::Right, BindingSide::Even) => self.even_right_x,
        }
    }

    pub fn row_y(&self, row: Row) -> f32 {
        match row {
            Row::Upper => self.upper_y,
            Row::Lower => self.lower_y,
        }
    }

    /// Transform placing a full-size source page into `slot`
    pub fn slot_transform(&self, slot: SlotPosition, side: BindingSide) -> Transform {
        Transform::new(
            self.minor_scale,
            self.column_x(slot.column(), side),
            self.row_y(slot.row()),
        )
    }

    /// Transform for the title page: full content width between the
    /// horizontal margins, vertically centered
    pub fn title_transform(&self) -> Transform {
        let width = self.page.width - self.inside_margin - self.outside_margin;
        let scale = width / self.page.width;
        let height = self.page.height * scale;
        Transform::new(scale, self.inside_margin, (self.page.height - height) / 2.0)
    }

    /// X position of the separator, centered in the column gap
    pub fn separator_x(&self, side: BindingSide) -> f32 {
        self.column_x(Column::Right, side) - self.column_spacing / 2.0
    }

    /// Top and bottom end of the separator line
    pub fn separator_span(&self, side: BindingSide) -> (Point, Point) {
        let overhang = self.vertical_slack() * SEPARATOR_OVERHANG_FRACTION;
        let x = self.separator_x(side);
        (
            Point::new(x, self.upper_y + self.minor_height + overhang),
            Point::new(x, self.lower_y - overhang),
        )
    }

    /// Anchor for the centered page-number label
    pub fn page_number_anchor(&self, side: BindingSide) -> Point {
        Point::new(
            self.separator_x(side),
            self.margin_bottom * PAGE_NUMBER_BASELINE_FRACTION,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4() -> PageSize {
        PageSize::new(595.0, 842.0)
    }

    #[test]
    fn test_quadrants_do_not_overlap() {
        let geometry = Geometry::derive(a4(), &Margins::default(), &Spacing::default()).unwrap();

        for side in [BindingSide::Odd, BindingSide::Even] {
            let left = geometry.column_x(Column::Left, side);
            let right = geometry.column_x(Column::Right, side);
            assert!(left + geometry.minor_width <= right + 1e-3);
            assert!(right + geometry.minor_width <= geometry.page.width + 1e-3);
        }
        assert!(geometry.lower_y + geometry.minor_height <= geometry.upper_y + 1e-3);
        assert!(geometry.upper_y + geometry.minor_height <= geometry.page.height + 1e-3);
    }

    #[test]
    fn test_zero_ratio_collapses_top_margin() {
        let margins = Margins {
            top_to_bottom_ratio: 0.0,
            ..Default::default()
        };
        let geometry = Geometry::derive(a4(), &margins, &Spacing::default()).unwrap();

        assert_eq!(geometry.margin_top, 0.0);
        assert!((geometry.upper_y + geometry.minor_height - a4().height).abs() < 1e-2);
    }

    #[test]
    fn test_title_transform_is_centered() {
        let geometry = Geometry::derive(a4(), &Margins::default(), &Spacing::default()).unwrap();
        let title = geometry.title_transform();

        let top = title.apply(Point::new(0.0, a4().height)).y;
        let bottom = title.apply(Point::new(0.0, 0.0)).y;
        assert!(((a4().height - top) - bottom).abs() < 1e-2);
        assert_eq!(title.tx, geometry.inside_margin);
    }

    #[test]
    fn test_excess_row_spacing_rejected() {
        let spacing = Spacing {
            row_ratio: 0.5,
            ..Default::default()
        };
        match Geometry::derive(a4(), &Margins::default(), &spacing) {
            Err(NupError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "row_spacing");
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }
}
