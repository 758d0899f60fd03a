//! Stable document metadata
//!
//! printpdf stamps each saved document with the current time and random
//! identifiers. This pass rewrites those fields with lopdf so that the same
//! text and settings always serialize to the same bytes.

use std::io::Cursor;

use lopdf::{Document, Object, StringFormat};

use crate::config::defaults::DOCUMENT_DATE;

/// Replace the volatile metadata of a saved PDF and re-save it.
///
/// Creation and modification dates are set to a fixed date, the XMP
/// metadata stream is dropped and the trailer `/ID` is derived from `title`.
pub fn pin_metadata(bytes: &[u8], title: &str) -> Result<Vec<u8>, String> {
    let mut doc = Document::load_mem(bytes)
        .map_err(|e| format!("Failed to parse PDF for metadata: {}", e))?;

    pin_info_dates(&mut doc);
    drop_xmp_metadata(&mut doc);

    let id = Object::String(document_id(title), StringFormat::Hexadecimal);
    doc.trailer.set("ID", Object::Array(vec![id.clone(), id]));

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| format!("Failed to save PDF: {}", e))?;

    Ok(output.into_inner())
}

fn pin_info_dates(doc: &mut Document) {
    let Ok(info_id) = doc.trailer.get(b"Info").and_then(Object::as_reference) else {
        return;
    };
    if let Ok(info) = doc.get_object_mut(info_id).and_then(Object::as_dict_mut) {
        info.set("CreationDate", Object::string_literal(DOCUMENT_DATE));
        info.set("ModDate", Object::string_literal(DOCUMENT_DATE));
    }
}

/// The XMP packet repeats the dates and carries a random instance id
fn drop_xmp_metadata(doc: &mut Document) {
    let Ok(root_id) = doc.trailer.get(b"Root").and_then(Object::as_reference) else {
        return;
    };
    let removed = doc
        .get_object_mut(root_id)
        .and_then(Object::as_dict_mut)
        .map(|catalog| catalog.remove(b"Metadata").is_some())
        .unwrap_or(false);
    if removed {
        doc.prune_objects();
    }
}

/// 16 bytes from two FNV-1a passes over the title
fn document_id(title: &str) -> Vec<u8> {
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let hash = |offset: u64| {
        title
            .bytes()
            .fold(offset, |h, b| (h ^ b as u64).wrapping_mul(FNV_PRIME))
    };

    let mut id = hash(0xcbf2_9ce4_8422_2325).to_be_bytes().to_vec();
    id.extend_from_slice(&hash(0x6c62_272e_07bb_0142).to_be_bytes());
    id
}
