// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-type decoders and the tag-table walker.

pub mod curve;
pub mod description;
pub mod mluc;
pub mod parametric;
pub mod s15fixed16array;
pub mod text;
pub mod xyz_array;

use crate::error::{DecodeError, Result};
use crate::primitives::{read_be_u32, read_signature};
use crate::signatures::Signature;

pub use curve::Curve;
pub use description::Description;
pub use mluc::MultiLocalizedUnicode;
pub use parametric::ParametricCurve;
pub use s15fixed16array::S15Fixed16Array;
pub use text::Text;
pub use xyz_array::XyzArray;

/// The decoded payload of one tag, chosen by its 4-byte type signature.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type")]
pub enum Element {
    Xyz(XyzArray),
    Curve(Curve),
    Parametric(ParametricCurve),
    Description(Description),
    Text(Text),
    MultiLocalizedUnicode(MultiLocalizedUnicode),
    S15Fixed16Array(S15Fixed16Array),
    /// No registered decoder for this type signature; non-fatal, the tag
    /// is still reported with its raw (offset, size).
    Untyped { type_signature: Signature },
    /// The registered decoder for this type signature failed on this tag's
    /// payload; confined to this tag, the rest of the table still decodes.
    Failed { type_signature: Signature, message: String },
}

/// One entry in the tag table: a signature plus the `(offset, size)` of
/// its referenced data, and the decoded element.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TagEntry {
    pub signature: Signature,
    pub offset: u32,
    pub size: u32,
    pub element: Element,
}

/// Reads the tag count at offset 128 and the entry table that follows,
/// dispatching each entry's referenced data through the element-type
/// registry. A failure inside one element decoder is confined to that
/// tag; the walk only returns `Err` when the table itself (the declared
/// count or an individual 12-byte entry) doesn't fit in the buffer — the
/// declared count is untrusted input and is bounds-checked before it is
/// used to size or index anything.
pub fn walk_tag_table(buffer: &[u8]) -> Result<Vec<TagEntry>> {
    const TABLE_OFFSET: usize = 128;
    let count = read_be_u32(&mut &buffer[TABLE_OFFSET..], TABLE_OFFSET)?;

    let mut entries = Vec::new();
    for i in 0..count {
        let entry_offset = TABLE_OFFSET + 4 + 12 * i as usize;
        let mut cursor = buffer
            .get(entry_offset..entry_offset.saturating_add(12))
            .ok_or(DecodeError::Truncated {
                offset: entry_offset,
                needed: (entry_offset + 12).saturating_sub(buffer.len()),
            })?;
        let signature = read_signature(&mut cursor, entry_offset)?;
        let offset = read_be_u32(&mut cursor, entry_offset + 4)?;
        let size = read_be_u32(&mut cursor, entry_offset + 8)?;

        let element = decode_element(buffer, signature, offset, size);
        entries.push(TagEntry { signature, offset, size, element });
    }
    Ok(entries)
}

fn decode_element(buffer: &[u8], signature: Signature, offset: u32, size: u32) -> Element {
    let offset = offset as usize;
    let size = size as usize;
    let slice = match buffer.get(offset..offset + size) {
        Some(slice) => slice,
        None => {
            log::warn!("tag `{signature}`: (offset {offset}, size {size}) exceeds buffer length");
            return Element::Failed {
                type_signature: Signature(0),
                message: "tag offset/size exceeds buffer length".to_string(),
            };
        }
    };
    let mut peek = slice;
    let type_signature = match read_signature(&mut peek, offset) {
        Ok(sig) => sig,
        Err(e) => {
            return Element::Failed { type_signature: Signature(0), message: e.to_string() };
        }
    };

    match decode_by_type(type_signature, slice) {
        Some(Ok(element)) => element,
        Some(Err(e)) => {
            let err = DecodeError::BadElement { signature, message: e.to_string() };
            log::warn!("{err}");
            Element::Failed { type_signature, message: e.to_string() }
        }
        None => {
            let err = DecodeError::UnknownElementType { signature, type_signature };
            log::debug!("{err}, recording as untyped");
            Element::Untyped { type_signature }
        }
    }
}

/// The signature-keyed element-type registry: an explicit `match` over
/// the 4-byte type signature, the re-architected form of the
/// reflective-dispatch pattern the source used to look up decoder classes
/// by name. Returns `None` for a signature with no registered decoder.
fn decode_by_type(type_signature: Signature, slice: &[u8]) -> Option<Result<Element>> {
    match type_signature.0 {
        0x5859_5A20 => Some(XyzArray::decode(slice).map(Element::Xyz)), // "XYZ "
        0x6375_7276 => Some(Curve::decode(slice).map(Element::Curve)),  // "curv"
        0x7061_7261 => Some(ParametricCurve::decode(slice).map(Element::Parametric)), // "para"
        0x6465_7363 => Some(Description::decode(slice).map(Element::Description)), // "desc"
        0x7465_7874 => Some(Text::decode(slice).map(Element::Text)),    // "text"
        0x6D6C_7563 => {
            Some(MultiLocalizedUnicode::decode(slice).map(Element::MultiLocalizedUnicode))
        } // "mluc"
        0x7366_3332 => Some(S15Fixed16Array::decode(slice).map(Element::S15Fixed16Array)), // "sf32"
        _ => None,
    }
}
