//! Sheet composition driver
//!
//! This module runs the composition independently of any PDF library:
//! 1. Validate options and derive the geometry
//! 2. Emit the optional title page and the blank page after it
//! 3. Place four source pages per sheet, padding the tail with blanks
//! 4. Merge the decoration overlay and append the sheet
//!
//! The PDF side is supplied through [`Compositor`] and [`Canvas`].

use crate::layout::{Geometry, Point, SourcePage, Transform, plan_sheets};
use crate::options::NupOptions;
use crate::overlay::{Font, Overlay, Stroke};
use crate::types::*;

/// Drawing primitives used by the decoration overlay
pub trait Canvas {
    /// Stroke a straight line from `from` to `to`
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw `text` horizontally centered on `anchor.x`, with its baseline
    /// at `anchor.y`
    fn centered_text(&mut self, anchor: Point, font: &Font, text: &str);
}

/// Page primitives needed to compose the output document.
///
/// Source pages are only ever read; every placement produces new content
/// on a sheet owned by the caller.
pub trait Compositor {
    /// An output page under construction
    type Sheet;
    /// A drawing surface that can be merged onto a sheet
    type Canvas: Canvas;

    /// Start an empty page of `size`
    fn blank_sheet(&mut self, size: PageSize) -> Result<Self::Sheet>;

    /// Merge `page` onto `sheet` after applying `transform` to it
    fn place_page(
        &mut self,
        sheet: &mut Self::Sheet,
        page: SourcePage,
        transform: &Transform,
    ) -> Result<()>;

    /// Start an empty drawing surface of `size`
    fn canvas(&mut self, size: PageSize) -> Self::Canvas;

    /// Merge a finished canvas on top of `sheet`
    fn merge_canvas(&mut self, sheet: &mut Self::Sheet, canvas: Self::Canvas) -> Result<()>;

    /// Append a finished sheet to the output
    fn append(&mut self, sheet: Self::Sheet) -> Result<()>;
}

/// Compose the whole output through `compositor`.
///
/// `page_size` is the size of the first source page; it is used for every
/// output page and for blank padding. Returns the number of pages appended.
pub fn compose<C: Compositor>(
    compositor: &mut C,
    source_pages: usize,
    page_size: PageSize,
    options: &NupOptions,
) -> Result<usize> {
    options.validate()?;

    if source_pages == 0 {
        return Err(NupError::NoPages);
    }

    let geometry = Geometry::derive(page_size, &options.margins, &options.spacing)?;
    let mut appended = 0;

    log::info!(
        "Composing {} source pages at scale {:.4}",
        source_pages,
        geometry.minor_scale
    );

    if options.with_title_page {
        let mut title = compositor.blank_sheet(page_size)?;
        compositor.place_page(&mut title, SourcePage::Page(0), &geometry.title_transform())?;
        compositor.append(title)?;

        let blank = compositor.blank_sheet(page_size)?;
        compositor.append(blank)?;

        appended += 2;
        log::debug!("Added title page and blank page");
    }

    for plan in plan_sheets(source_pages, options.with_title_page) {
        log::debug!(
            "Sheet {} (first page {}, {:?} side, {} blank)",
            plan.page_number,
            plan.sheet_index,
            plan.side,
            plan.blank_count()
        );

        let mut sheet = compositor.blank_sheet(page_size)?;
        for (slot, page) in plan.placements() {
            let transform = geometry.slot_transform(slot, plan.side);
            compositor.place_page(&mut sheet, page, &transform)?;
        }

        if options.decorations.any_enabled() {
            let overlay = Overlay::for_sheet(&geometry, &plan, &options.decorations);
            let mut canvas = compositor.canvas(page_size);
            overlay.draw(&mut canvas);
            compositor.merge_canvas(&mut sheet, canvas)?;
        }

        compositor.append(sheet)?;
        appended += 1;
    }

    log::info!("Composed {} output pages", appended);

    Ok(appended)
}
