// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `mluc` (multiLocalizedUnicodeType).
//!
//! Records are keyed by lower-cased locale (`"en"` or `"en-us"`), matching
//! the teacher's `MultiLocalizedUnicodeType` locale-map convention.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::primitives::{read_be_u16, read_be_u32, read_utf16be_string};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MultiLocalizedUnicode {
    #[serde(flatten)]
    pub entries: BTreeMap<String, String>,
}

impl MultiLocalizedUnicode {
    pub fn decode(slice: &[u8]) -> Result<Self> {
        let mut cursor = &slice[4..];
        let _reserved = read_be_u32(&mut cursor, 4)?;
        let record_count = read_be_u32(&mut cursor, 8)? as usize;
        let record_size = read_be_u32(&mut cursor, 12)? as usize;

        let mut entries = BTreeMap::new();
        for i in 0..record_count {
            let record_offset = 16 + i * record_size;
            let mut cursor = &slice[record_offset..];
            let language = read_be_u16(&mut cursor, record_offset)?.to_be_bytes();
            let country = read_be_u16(&mut cursor, record_offset + 2)?.to_be_bytes();
            let length = read_be_u32(&mut cursor, record_offset + 4)? as usize;
            let offset = read_be_u32(&mut cursor, record_offset + 8)? as usize;

            let mut value_cursor = &slice[offset..];
            let value = read_utf16be_string(&mut value_cursor, offset, length)?;

            let lang_str = String::from_utf8_lossy(&language).to_ascii_lowercase();
            let key = if country != [0, 0] {
                let country_str = String::from_utf8_lossy(&country).to_ascii_lowercase();
                format!("{lang_str}-{country_str}")
            } else {
                lang_str
            };
            entries.insert(key, value);
        }
        Ok(MultiLocalizedUnicode { entries })
    }
}
