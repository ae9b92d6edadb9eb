//! 4-up booklet composition
//!
//! This module ties the pieces together:
//! 1. Read the page count and size of the source document
//! 2. Run the composition driver against a lopdf compositor
//! 3. Return the finished output document

mod io;

pub use io::{load_pdf, prepare_output_path, save_pdf};

use crate::compose::compose;
use crate::options::NupOptions;
use crate::render::PdfCompositor;
use crate::types::*;
use lopdf::Document;

/// Main composition function
pub async fn nup(document: &Document, options: &NupOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || nup_sync(&document, &options)).await?
}

/// Compose `source` into 4-up sheets on the current thread
pub fn nup_sync(source: &Document, options: &NupOptions) -> Result<Document> {
    let mut compositor = PdfCompositor::new(source);

    let source_pages = compositor.source_page_count();
    if source_pages == 0 {
        return Err(NupError::NoPages);
    }

    let page_size = compositor.first_page_size()?;
    compose(&mut compositor, source_pages, page_size, options)?;

    Ok(compositor.finish())
}
