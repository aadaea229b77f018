// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `text` (textType).

use crate::error::Result;
use crate::primitives::{read_ascii_string, read_be_u32};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn decode(slice: &[u8]) -> Result<Self> {
        let mut cursor = &slice[4..];
        let _reserved = read_be_u32(&mut cursor, 4)?;
        let remaining = slice.len() - 8;
        let value = read_ascii_string(&mut cursor, 8, remaining)?;
        Ok(Text { value })
    }
}
