//! Assignment of source pages to sheets and quadrants

use crate::constants::PAGES_PER_SHEET;

use super::{BindingSide, SlotPosition, SourcePage};

/// Resolve a logical page index to a source page.
///
/// With a title page the first source page is consumed by the title, so
/// logical index `i` refers to source page `i + 1`. Indices past the end of
/// the document resolve to [`SourcePage::Blank`].
pub fn resolve_page(logical_index: usize, source_pages: usize, with_title_page: bool) -> SourcePage {
    let index = if with_title_page {
        logical_index + 1
    } else {
        logical_index
    };

    if index >= source_pages {
        SourcePage::Blank
    } else {
        SourcePage::Page(index)
    }
}

/// Number of source pages distributed over 4-up sheets
pub fn pages_to_place(source_pages: usize, with_title_page: bool) -> usize {
    if with_title_page {
        source_pages.saturating_sub(1)
    } else {
        source_pages
    }
}

/// Everything needed to compose one 4-up sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    /// Logical index of the first page on this sheet
    pub sheet_index: usize,
    /// 1-based number printed on the sheet
    pub page_number: usize,
    pub side: BindingSide,
    /// Pages in slot order (see [`SlotPosition::ALL`])
    pub pages: [SourcePage; 4],
}

impl SheetPlan {
    pub fn new(sheet_index: usize, source_pages: usize, with_title_page: bool) -> Self {
        let pages = SlotPosition::ALL.map(|slot| {
            resolve_page(sheet_index + slot.index(), source_pages, with_title_page)
        });

        Self {
            sheet_index,
            page_number: sheet_index / PAGES_PER_SHEET + 1,
            side: BindingSide::for_sheet(sheet_index),
            pages,
        }
    }

    /// Text of the page-number label
    pub fn label(&self) -> String {
        self.page_number.to_string()
    }

    /// Slots paired with the page placed into each
    pub fn placements(&self) -> impl Iterator<Item = (SlotPosition, SourcePage)> + '_ {
        SlotPosition::ALL.into_iter().zip(self.pages.iter().copied())
    }

    pub fn blank_count(&self) -> usize {
        self.pages.iter().filter(|page| page.is_blank()).count()
    }
}

/// Plan every 4-up sheet for a document with `source_pages` pages
pub fn plan_sheets(source_pages: usize, with_title_page: bool) -> Vec<SheetPlan> {
    (0..pages_to_place(source_pages, with_title_page))
        .step_by(PAGES_PER_SHEET)
        .map(|sheet_index| SheetPlan::new(sheet_index, source_pages, with_title_page))
        .collect()
}
