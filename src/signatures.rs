// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-byte ASCII signatures used throughout the ICC header and tag table.

use std::fmt;
use std::str::FromStr;

pub mod colorspace;
pub mod device_class;
pub mod platform;
pub mod rendering_intent;

pub use colorspace::ColorSpace;
pub use device_class::DeviceClass;
pub use platform::Platform;
pub use rendering_intent::RenderingIntent;

/// A raw 4-byte ICC signature, stored as its big-endian `u32` packing.
///
/// Printed as its ASCII form when every byte is printable, otherwise as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(into = "String")]
pub struct Signature(pub u32);

impl Signature {
    pub fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    fn is_printable_ascii(self) -> bool {
        self.to_be_bytes().iter().all(|&b| (0x20..0x7f).contains(&b))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_printable_ascii() {
            let bytes = self.to_be_bytes();
            write!(f, "{}", std::str::from_utf8(&bytes).unwrap())
        } else {
            write!(f, "0x{:08X}", self.0)
        }
    }
}

impl From<Signature> for String {
    fn from(sig: Signature) -> Self {
        sig.to_string()
    }
}

impl FromStr for Signature {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix("0x") {
            return Ok(Signature(u32::from_str_radix(hex, 16)?));
        }
        let mut bytes = [b' '; 4];
        for (i, b) in s.bytes().take(4).enumerate() {
            bytes[i] = b;
        }
        Ok(Signature::from_be_bytes(bytes))
    }
}
