use crate::constants::PAGES_PER_SHEET;
use crate::layout::pages_to_place;
use crate::options::NupOptions;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for composing `document`
pub fn calculate_statistics(document: &Document, options: &NupOptions) -> Result<NupStatistics> {
    let source_pages = document.get_pages().len();

    if source_pages == 0 {
        return Err(NupError::NoPages);
    }

    Ok(plan_statistics(source_pages, options.with_title_page))
}

/// Statistics for a document with `source_pages` pages
pub fn plan_statistics(source_pages: usize, with_title_page: bool) -> NupStatistics {
    let placed_pages = pages_to_place(source_pages, with_title_page);
    let title_pages = if with_title_page && source_pages > 0 {
        2
    } else {
        0
    };

    let sheets = placed_pages.div_ceil(PAGES_PER_SHEET);
    let blank_slots = sheets * PAGES_PER_SHEET - placed_pages;

    NupStatistics {
        source_pages,
        placed_pages,
        title_pages,
        sheets,
        output_pages: title_pages + sheets,
        blank_slots,
    }
}
