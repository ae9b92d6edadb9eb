//! Decoration overlay for composed sheets
//!
//! The overlay is a separator line between the two columns and the sheet
//! number centered below it. It is drawn against the [`Canvas`] trait so the
//! same description can be rendered into a PDF content stream or recorded
//! by a test double.

use crate::compose::Canvas;
use crate::constants::{
    PAGE_NUMBER_FONT, PAGE_NUMBER_FONT_SIZE, SEPARATOR_LINE_COLOR, SEPARATOR_LINE_WIDTH_MM,
    mm_to_pt,
};
use crate::layout::{Geometry, Point, SheetPlan};
use crate::options::Decorations;

/// Stroke style for lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// RGB, each channel 0.0..=1.0
    pub color: (f32, f32, f32),
    /// Line width in points
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: SEPARATOR_LINE_COLOR,
            width: mm_to_pt(SEPARATOR_LINE_WIDTH_MM),
        }
    }
}

/// Font for text drawn on the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Base font name of a standard PDF font
    pub name: &'static str,
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: PAGE_NUMBER_FONT,
            size: PAGE_NUMBER_FONT_SIZE,
        }
    }
}

/// Separator line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorLine {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

/// Centered page-number label
#[derive(Debug, Clone, PartialEq)]
pub struct PageLabel {
    /// Horizontal center and baseline
    pub anchor: Point,
    pub text: String,
    pub font: Font,
}

/// Decorations to draw on one sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overlay {
    pub line: Option<SeparatorLine>,
    pub label: Option<PageLabel>,
}

impl Overlay {
    /// Build the overlay for `plan` from the enabled decorations
    pub fn for_sheet(geometry: &Geometry, plan: &SheetPlan, decorations: &Decorations) -> Self {
        let line = decorations.separator_line.then(|| {
            let (from, to) = geometry.separator_span(plan.side);
            SeparatorLine {
                from,
                to,
                stroke: Stroke::default(),
            }
        });

        let label = decorations.page_numbers.then(|| PageLabel {
            anchor: geometry.page_number_anchor(plan.side),
            text: plan.label(),
            font: Font::default(),
        });

        Self { line, label }
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.label.is_none()
    }

    /// Draw onto `canvas`. An empty overlay draws nothing.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if let Some(line) = &self.line {
            canvas.line(line.from, line.to, &line.stroke);
        }

        if let Some(label) = &self.label {
            canvas.centered_text(label.anchor, &label.font, &label.text);
        }
    }
}
