// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `desc` (textDescriptionType).
//!
//! The ScriptCode region is a fixed 67-byte tail starting 3 bytes after the
//! start of the 2-byte ScriptCode code field, regardless of the declared
//! ScriptCode count — matching the original source's `descType.read` rather
//! than treating the count as a true length prefix (see DESIGN.md).
//!
//! The Unicode field's declared count is a raw byte count, decoded as
//! UTF-8, not a UTF-16 character count — the original source's `descType`
//! never passes a `utf-16be` codec to its string unpacker; only `textType`
//! does that (see DESIGN.md).

use crate::error::Result;
use crate::primitives::{read_ascii_string, read_be_u16, read_be_u32, read_u8};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Description {
    pub ascii: String,
    pub unicode_language_code: u32,
    pub unicode: String,
    pub scriptcode_code: u16,
    pub scriptcode_name: String,
}

impl Description {
    pub fn decode(slice: &[u8]) -> Result<Self> {
        let mut cursor = &slice[4..];
        let _reserved = read_be_u32(&mut cursor, 4)?;
        let ascii_count = read_be_u32(&mut cursor, 8)? as usize;
        let ascii_offset = 12;
        let ascii = read_ascii_string(&mut cursor, ascii_offset, ascii_count)?;

        let unicode_offset = ascii_offset + ascii_count;
        let unicode_language_code = read_be_u32(&mut cursor, unicode_offset)?;
        let unicode_count = read_be_u32(&mut cursor, unicode_offset + 4)? as usize;
        let unicode_bytes_offset = unicode_offset + 8;
        let unicode = read_ascii_string(&mut cursor, unicode_bytes_offset, unicode_count)?;

        let scriptcode_offset = unicode_bytes_offset + unicode_count;
        let scriptcode_code = read_be_u16(&mut cursor, scriptcode_offset)?;
        let _scriptcode_count = read_u8(&mut cursor, scriptcode_offset + 2)?;
        let scriptcode_name = read_ascii_string(&mut cursor, scriptcode_offset + 3, 67)?;

        Ok(Description {
            ascii,
            unicode_language_code,
            unicode,
            scriptcode_code,
            scriptcode_name,
        })
    }
}
