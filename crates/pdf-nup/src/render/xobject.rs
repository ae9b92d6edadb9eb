//! Form XObject creation from source pages
//!
//! Every placed source page becomes one Form XObject in the output
//! document. The source document itself is never modified.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::{PageSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Parent chain depth after which inheritance lookup gives up
const MAX_PAGE_TREE_DEPTH: usize = 32;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject holding the content of a source page.
///
/// Resources are deep-copied into `output`; `cache` maps source object IDs
/// to already-copied output IDs so shared fonts and images are copied once
/// per run rather than once per page.
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let media_box = inherited_attribute(source, page_id, b"MediaBox")
        .and_then(|obj| obj.as_array().ok())
        .cloned()
        .unwrap_or_else(default_media_box);

    let content = page_content(source, page_id)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("FormType", Object::Integer(1));
    xobject_dict.set("BBox", Object::Array(media_box));

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content)))
}

fn default_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.1),
    ]
}

/// Look up a page attribute, following the Parent chain for inheritable
/// keys such as MediaBox and Resources. References are resolved.
fn inherited_attribute<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut node = doc.get_dictionary(page_id).ok()?;

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            return match value {
                Object::Reference(id) => doc.get_object(*id).ok(),
                other => Some(other),
            };
        }

        let parent_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
        node = doc.get_dictionary(parent_id).ok()?;
    }

    None
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Decoded content of a page, with multiple streams concatenated
fn page_content(doc: &Document, page_id: ObjectId) -> Result<Vec<u8>> {
    let page_dict = doc.get_dictionary(page_id)?;

    let contents = match page_dict.get(b"Contents") {
        Ok(contents) => contents,
        Err(_) => return Ok(Vec::new()),
    };

    let stream_ids: Vec<ObjectId> = match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            // Contents may point at an array of streams
            Object::Array(refs) => refs.iter().filter_map(|obj| obj.as_reference().ok()).collect(),
            _ => vec![*id],
        },
        Object::Array(refs) => refs.iter().filter_map(|obj| obj.as_reference().ok()).collect(),
        _ => Vec::new(),
    };

    let mut content = Vec::new();
    for id in stream_ids {
        if let Ok(stream) = doc.get_object(id)?.as_stream() {
            let data = stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone());
            content.extend_from_slice(&data);
            content.push(b'\n');
        }
    }

    Ok(content)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from `source` into `output`, following references.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the ID before recursing so reference cycles
            // (e.g. annotation /P back-links) terminate.
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let items: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(items?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut copied = Dictionary::new();
    for (key, value) in dict.iter() {
        copied.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(copied)
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// Size of a source page from its (possibly inherited) MediaBox.
///
/// Width and height are the upper-right corner of the box; pages without
/// a usable MediaBox fall back to US Letter.
pub fn get_page_size(doc: &Document, page_id: ObjectId) -> Result<PageSize> {
    // Surface a missing page as an error rather than a default size
    doc.get_dictionary(page_id)?;

    let size = inherited_attribute(doc, page_id, b"MediaBox")
        .and_then(|obj| obj.as_array().ok())
        .filter(|mb| mb.len() >= 4)
        .map(|mb| {
            (
                extract_number(&mb[2]).unwrap_or(DEFAULT_PAGE_DIMENSIONS.0),
                extract_number(&mb[3]).unwrap_or(DEFAULT_PAGE_DIMENSIONS.1),
            )
        })
        .unwrap_or(DEFAULT_PAGE_DIMENSIONS);

    Ok(size.into())
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
