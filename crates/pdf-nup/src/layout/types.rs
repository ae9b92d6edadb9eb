//! Layout data types for 4-up composition
//!
//! These types sit between the geometry derivation and the compositor that
//! turns placements into output pages.

use crate::constants::PAGES_PER_SIDE_PERIOD;

/// Which binding-side layout a sheet uses.
///
/// Consecutive sheets alternate so that the inside margin stays next
/// to the spine when sheets are printed back to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSide {
    /// Columns start at the inside margin
    Odd,
    /// Columns start at the outside margin
    Even,
}

impl BindingSide {
    /// Side for the sheet whose first logical page is `sheet_index`
    pub fn for_sheet(sheet_index: usize) -> Self {
        if sheet_index % PAGES_PER_SIDE_PERIOD == 0 {
            BindingSide::Odd
        } else {
            BindingSide::Even
        }
    }
}

/// Column within a composed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

/// Row within a composed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Upper,
    Lower,
}

/// One of the four quadrants of a composed sheet.
///
/// Pages fill the left column top to bottom, then the right column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPosition {
    UpperLeft,
    LowerLeft,
    UpperRight,
    LowerRight,
}

impl SlotPosition {
    /// All slots in placement order
    pub const ALL: [SlotPosition; 4] = [
        SlotPosition::UpperLeft,
        SlotPosition::LowerLeft,
        SlotPosition::UpperRight,
        SlotPosition::LowerRight,
    ];

    pub fn index(self) -> usize {
        match self {
            SlotPosition::UpperLeft => 0,
            SlotPosition::LowerLeft => 1,
            SlotPosition::UpperRight => 2,
            SlotPosition::LowerRight => 3,
        }
    }

    pub fn column(self) -> Column {
        match self {
            SlotPosition::UpperLeft | SlotPosition::LowerLeft => Column::Left,
            SlotPosition::UpperRight | SlotPosition::LowerRight => Column::Right,
        }
    }

    pub fn row(self) -> Row {
        match self {
            SlotPosition::UpperLeft | SlotPosition::UpperRight => Row::Upper,
            SlotPosition::LowerLeft | SlotPosition::LowerRight => Row::Lower,
        }
    }
}

/// A page to be placed: either a page of the input document or padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePage {
    /// 0-based index into the input document
    Page(usize),
    /// Synthetic blank page the size of the first source page
    Blank,
}

impl SourcePage {
    pub fn is_blank(self) -> bool {
        self == SourcePage::Blank
    }
}

/// Uniform scale followed by a translation.
///
/// Equivalent to the PDF matrix `[scale 0 0 scale tx ty]`: content is
/// scaled first, then moved by `(tx, ty)` in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform {
    pub fn new(scale: f32, tx: f32, ty: f32) -> Self {
        Self { scale, tx, ty }
    }

    /// The six operands of a `cm` operator
    pub fn matrix(&self) -> [f32; 6] {
        [self.scale, 0.0, 0.0, self.scale, self.tx, self.ty]
    }

    /// Map a point in source coordinates to output coordinates
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.tx,
            point.y * self.scale + self.ty,
        )
    }
}

/// A point in PDF user space (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
