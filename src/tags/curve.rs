// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `curv` (curveType).

use crate::error::Result;
use crate::primitives::{read_be_u16, read_be_u32, u8fixed8_to_f64};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum CurveKind {
    Identity,
    Gamma(f64),
    Sampled,
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveKind::Identity => write!(f, "Identity Curve"),
            CurveKind::Gamma(_) => write!(f, "Power Function"),
            CurveKind::Sampled => write!(f, "1D Curve"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Curve {
    pub kind: CurveKind,
    /// Normalized `[0, 1]` samples when `kind` is `Sampled`; empty for
    /// `Identity` and `Gamma`.
    pub samples: Vec<f64>,
}

impl Curve {
    pub fn decode(slice: &[u8]) -> Result<Self> {
        let mut cursor = &slice[4..]; // skip the "curv" type signature
        let _reserved = read_be_u32(&mut cursor, 4)?;
        let count = read_be_u32(&mut cursor, 8)?;

        match count {
            0 => Ok(Curve { kind: CurveKind::Identity, samples: Vec::new() }),
            1 => {
                let raw = read_be_u16(&mut cursor, 12)?;
                let gamma = u8fixed8_to_f64(raw);
                Ok(Curve { kind: CurveKind::Gamma(gamma), samples: vec![gamma] })
            }
            n => {
                let mut samples = Vec::with_capacity(n as usize);
                for i in 0..n {
                    let raw = read_be_u16(&mut cursor, 12 + 2 * i as usize)?;
                    samples.push(raw as f64 / 65535.0);
                }
                Ok(Curve { kind: CurveKind::Sampled, samples })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(count: u32, tail: &[u8]) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend(*b"curv");
        v.extend(0u32.to_be_bytes());
        v.extend(count.to_be_bytes());
        v.extend_from_slice(tail);
        v
    }

    #[test]
    fn identity_curve_has_no_samples() {
        let curve = Curve::decode(&payload(0, &[])).unwrap();
        assert_eq!(curve.kind, CurveKind::Identity);
        assert!(curve.samples.is_empty());
    }

    #[test]
    fn single_sample_decodes_as_u8fixed8_gamma() {
        let curve = Curve::decode(&payload(1, &0x0200u16.to_be_bytes())).unwrap();
        assert_eq!(curve.kind, CurveKind::Gamma(2.0));
    }

    #[test]
    fn multi_sample_curve_normalizes_to_unit_interval() {
        let mut tail = Vec::new();
        tail.extend(0u16.to_be_bytes());
        tail.extend(32768u16.to_be_bytes());
        tail.extend(65535u16.to_be_bytes());
        let curve = Curve::decode(&payload(3, &tail)).unwrap();
        assert_eq!(curve.kind, CurveKind::Sampled);
        assert!(curve.samples.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert_eq!(curve.samples[2], 1.0);
    }
}
