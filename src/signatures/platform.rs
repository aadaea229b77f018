// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::Signature;

/// The primary-platform signature at header offset 40..44.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, serde::Serialize)]
pub enum Platform {
    #[strum(to_string = "Apple Computer, Inc.")]
    Apple,
    #[strum(to_string = "Microsoft Corporation")]
    Microsoft,
    #[strum(to_string = "Silicon Graphics, Inc.")]
    SiliconGraphics,
    #[strum(to_string = "Sun Microsystems, Inc.")]
    SunMicrosystems,
    #[strum(to_string = "None")]
    Unknown,
}

impl Platform {
    pub fn new(sig: Signature) -> Self {
        match sig.0 {
            0x4150_504C => Platform::Apple,           // 'APPL'
            0x4D53_4654 => Platform::Microsoft,        // 'MSFT'
            0x5347_4920 => Platform::SiliconGraphics,  // 'SGI '
            0x5355_4E57 => Platform::SunMicrosystems,  // 'SUNW'
            _ => Platform::Unknown,
        }
    }
}
