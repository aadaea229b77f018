// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `sf32` (s15Fixed16ArrayType).

use crate::error::Result;
use crate::primitives::{read_be_u32, read_s15fixed16};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct S15Fixed16Array {
    pub values: Vec<f64>,
}

impl S15Fixed16Array {
    pub fn decode(slice: &[u8]) -> Result<Self> {
        let mut cursor = &slice[4..];
        let _reserved = read_be_u32(&mut cursor, 4)?;
        let count = (slice.len() - 8) / 4;
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(read_s15fixed16(&mut cursor, 8 + 4 * i)?);
        }
        Ok(S15Fixed16Array { values })
    }
}
