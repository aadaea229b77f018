// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::Signature;

/// The ICC profile/device class at header offset 12..16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, serde::Serialize)]
pub enum DeviceClass {
    Input,
    Display,
    Output,
    DeviceLink,
    ColorSpace,
    Abstract,
    NamedColor,
    #[strum(to_string = "None")]
    Unknown,
}

impl DeviceClass {
    pub fn new(sig: Signature) -> Self {
        match sig.0 {
            0x7363_6E72 => DeviceClass::Input,      // 'scnr'
            0x6D6E_7472 => DeviceClass::Display,     // 'mntr'
            0x7072_7472 => DeviceClass::Output,      // 'prtr'
            0x6C69_6E6B => DeviceClass::DeviceLink,  // 'link'
            0x7370_6163 => DeviceClass::ColorSpace,  // 'spac'
            0x6162_7374 => DeviceClass::Abstract,    // 'abst'
            0x6E6D_636C => DeviceClass::NamedColor,  // 'nmcl'
            _ => DeviceClass::Unknown,
        }
    }
}
