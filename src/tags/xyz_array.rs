// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `XYZ ` (XYZType): `reserved u32` then `N = (size-8)/12` XYZ triples.

use crate::error::Result;
use crate::primitives::read_be_u32;
use crate::xyz::Xyz;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct XyzArray {
    pub values: Vec<Xyz>,
}

impl XyzArray {
    pub fn decode(slice: &[u8]) -> Result<Self> {
        let mut cursor = &slice[4..];
        let _reserved = read_be_u32(&mut cursor, 4)?;
        let count = (slice.len() - 8) / 12;
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(Xyz::read(&mut cursor, 8 + 12 * i)?);
        }
        Ok(XyzArray { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::f64_to_s15fixed16;

    #[test]
    fn decodes_single_triple() {
        let mut payload = Vec::new();
        payload.extend(*b"XYZ ");
        payload.extend(0u32.to_be_bytes());
        payload.extend(f64_to_s15fixed16(0.9642).to_be_bytes());
        payload.extend(f64_to_s15fixed16(1.0).to_be_bytes());
        payload.extend(f64_to_s15fixed16(0.8249).to_be_bytes());
        let arr = XyzArray::decode(&payload).unwrap();
        assert_eq!(arr.values.len(), 1);
        assert!((arr.values[0].y - 1.0).abs() < 1e-4);
    }
}
