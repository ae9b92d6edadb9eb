//! Output page rendering with lopdf
//!
//! [`PdfCompositor`] implements the composition primitives on top of an
//! output [`Document`]: source pages become Form XObjects drawn with a `cm`
//! matrix, and the overlay canvas becomes a plain content stream.

use crate::compose::{Canvas, Compositor};
use crate::constants::HELVETICA_CHAR_WIDTH_RATIO;
use crate::layout::{Point, SourcePage, Transform};
use crate::overlay::{Font, Stroke};
use crate::types::{NupError, PageSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::{create_page_xobject, get_page_size};

// =============================================================================
// Sheet and Canvas
// =============================================================================

/// An output page under construction
#[derive(Debug)]
pub struct PdfSheet {
    size: PageSize,
    content_ops: Vec<String>,
    xobjects: Dictionary,
    fonts: Dictionary,
}

/// Overlay canvas that records PDF content stream operators
#[derive(Debug, Default)]
pub struct ContentCanvas {
    ops: String,
    fonts: Vec<&'static str>,
}

impl ContentCanvas {
    /// Content stream operators drawn so far
    pub fn content(&self) -> &str {
        &self.ops
    }
}

impl Canvas for ContentCanvas {
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let (r, g, b) = stroke.color;
        self.ops.push_str(&format!(
            "q {} {} {} RG {} w {} {} m {} {} l S Q\n",
            r, g, b, stroke.width, from.x, from.y, to.x, to.y
        ));
    }

    fn centered_text(&mut self, anchor: Point, font: &Font, text: &str) {
        let text_width = text.chars().count() as f32 * font.size * HELVETICA_CHAR_WIDTH_RATIO;
        let x = anchor.x - text_width / 2.0;

        if !self.fonts.contains(&font.name) {
            self.fonts.push(font.name);
        }

        self.ops.push_str(&format!(
            "BT /{} {} Tf {} {} Td ({}) Tj ET\n",
            font.name,
            font.size,
            x,
            anchor.y,
            escape_pdf_string(text)
        ));
    }
}

/// Escape a string for use inside a PDF literal string
fn escape_pdf_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

// =============================================================================
// Compositor
// =============================================================================

/// Builds the composed output document from a read-only source document
pub struct PdfCompositor<'a> {
    source: &'a Document,
    source_page_ids: Vec<ObjectId>,
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    /// Source object ID -> copied output object ID
    object_cache: HashMap<ObjectId, ObjectId>,
    /// Source page index -> Form XObject
    page_xobjects: HashMap<usize, ObjectId>,
    /// Base font name -> font dictionary
    font_ids: HashMap<&'static str, ObjectId>,
}

impl<'a> PdfCompositor<'a> {
    pub fn new(source: &'a Document) -> Self {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();

        Self {
            source,
            source_page_ids: source.get_pages().values().copied().collect(),
            output,
            pages_tree_id,
            page_refs: Vec::new(),
            object_cache: HashMap::new(),
            page_xobjects: HashMap::new(),
            font_ids: HashMap::new(),
        }
    }

    pub fn source_page_count(&self) -> usize {
        self.source_page_ids.len()
    }

    /// Size of the first source page
    pub fn first_page_size(&self) -> Result<PageSize> {
        let first = self.source_page_ids.first().ok_or(NupError::NoPages)?;
        get_page_size(self.source, *first)
    }

    /// Finish the page tree and catalog and return the output document
    pub fn finish(mut self) -> Document {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        self.output
    }

    fn page_xobject(&mut self, index: usize) -> Result<ObjectId> {
        if let Some(&id) = self.page_xobjects.get(&index) {
            return Ok(id);
        }

        let page_id = *self.source_page_ids.get(index).ok_or_else(|| {
            NupError::Config(format!(
                "Source page {} out of range ({} pages)",
                index,
                self.source_page_ids.len()
            ))
        })?;

        let id = create_page_xobject(
            &mut self.output,
            self.source,
            page_id,
            &mut self.object_cache,
        )?;
        self.page_xobjects.insert(index, id);
        Ok(id)
    }

    fn font(&mut self, name: &'static str) -> ObjectId {
        if let Some(&id) = self.font_ids.get(name) {
            return id;
        }

        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(name.as_bytes().to_vec()));
        font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        let id = self.output.add_object(font_dict);
        self.font_ids.insert(name, id);
        id
    }
}

impl Compositor for PdfCompositor<'_> {
    type Sheet = PdfSheet;
    type Canvas = ContentCanvas;

    fn blank_sheet(&mut self, size: PageSize) -> Result<PdfSheet> {
        Ok(PdfSheet {
            size,
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
            fonts: Dictionary::new(),
        })
    }

    fn place_page(
        &mut self,
        sheet: &mut PdfSheet,
        page: SourcePage,
        transform: &Transform,
    ) -> Result<()> {
        // Merging a blank page adds no content
        let SourcePage::Page(index) = page else {
            return Ok(());
        };

        let xobject_id = self.page_xobject(index)?;
        let xobject_name = format!("P{}", sheet.xobjects.len());
        sheet
            .xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        let [a, b, c, d, e, f] = transform.matrix();
        sheet.content_ops.push(format!(
            "q {} {} {} {} {} {} cm /{} Do Q\n",
            a, b, c, d, e, f, xobject_name
        ));
        Ok(())
    }

    fn canvas(&mut self, _size: PageSize) -> ContentCanvas {
        ContentCanvas::default()
    }

    fn merge_canvas(&mut self, sheet: &mut PdfSheet, canvas: ContentCanvas) -> Result<()> {
        if canvas.ops.is_empty() {
            return Ok(());
        }

        for name in canvas.fonts {
            let font_id = self.font(name);
            sheet.fonts.set(name.as_bytes(), Object::Reference(font_id));
        }

        sheet.content_ops.push(format!("q\n{}Q\n", canvas.ops));
        Ok(())
    }

    fn append(&mut self, sheet: PdfSheet) -> Result<()> {
        let mut resources = Dictionary::new();
        if !sheet.xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(sheet.xobjects));
        }
        if !sheet.fonts.is_empty() {
            resources.set("Font", Object::Dictionary(sheet.fonts));
        }

        let content = sheet.content_ops.join("");
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(sheet.size.width),
                Object::Real(sheet.size.height),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }
}
