// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `para` (parametricCurveType).

use crate::error::{DecodeError, Result};
use crate::primitives::{read_be_u16, read_be_u32, read_s15fixed16};

/// Parameter counts per function type.
const PARAM_COUNTS: [usize; 5] = [1, 3, 4, 5, 7];

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParametricCurve {
    pub function_type: u16,
    /// Ordered parameters named `g, a, b, c, d, e, f`, truncated to however
    /// many this function type declares.
    pub parameters: Vec<f64>,
}

impl ParametricCurve {
    pub fn decode(slice: &[u8]) -> Result<Self> {
        let mut cursor = &slice[4..];
        let _reserved = read_be_u32(&mut cursor, 4)?;
        let function_type = read_be_u16(&mut cursor, 8)?;
        let _reserved2 = read_be_u16(&mut cursor, 10)?;

        let n = *PARAM_COUNTS
            .get(function_type as usize)
            .ok_or(DecodeError::BadParametric { function_type })?;

        let mut parameters = Vec::with_capacity(n);
        for i in 0..n {
            parameters.push(read_s15fixed16(&mut cursor, 12 + 4 * i)?);
        }
        Ok(ParametricCurve { function_type, parameters })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::f64_to_s15fixed16;

    fn payload(function_type: u16, params: &[f64]) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend(*b"para");
        v.extend(0u32.to_be_bytes());
        v.extend(function_type.to_be_bytes());
        v.extend(0u16.to_be_bytes());
        for p in params {
            v.extend(f64_to_s15fixed16(*p).to_be_bytes());
        }
        v
    }

    #[test]
    fn gamma_only_function_reads_one_parameter() {
        let curve = ParametricCurve::decode(&payload(0, &[2.2])).unwrap();
        assert_eq!(curve.parameters.len(), 1);
        assert!((curve.parameters[0] - 2.2).abs() < 1e-4);
    }

    #[test]
    fn full_function_reads_seven_parameters() {
        let params = [2.2, 1.0, 0.0, 1.0, 0.5, 0.0, 0.1];
        let curve = ParametricCurve::decode(&payload(4, &params)).unwrap();
        assert_eq!(curve.parameters.len(), 7);
    }

    #[test]
    fn unknown_function_type_is_bad_parametric() {
        let err = ParametricCurve::decode(&payload(5, &[])).unwrap_err();
        assert!(matches!(err, DecodeError::BadParametric { function_type: 5 }));
    }
}
