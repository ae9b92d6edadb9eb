//! PDF rendering for 4-up composition
//!
//! This module handles all lopdf-specific operations:
//! - Creating Form XObjects from source pages
//! - Building composed output pages
//! - Deep copying PDF objects

mod page;
mod xobject;

pub use page::{ContentCanvas, PdfCompositor, PdfSheet};
pub use xobject::{copy_object_deep, create_page_xobject, get_page_size};
