// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::Signature;

/// A color space signature, used for both the data color space and the PCS
/// header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, serde::Serialize)]
pub enum ColorSpace {
    #[strum(to_string = "nCIEXYZ or PCSXYZ")]
    Xyz,
    #[strum(to_string = "CIELAB or PCSLAB")]
    Lab,
    #[strum(to_string = "CIELUV")]
    Luv,
    #[strum(to_string = "YCbCr")]
    YCbCr,
    #[strum(to_string = "CIEYxy")]
    Yxy,
    #[strum(to_string = "RGB")]
    Rgb,
    #[strum(to_string = "Gray")]
    Gray,
    #[strum(to_string = "HSV")]
    Hsv,
    #[strum(to_string = "HLS")]
    Hls,
    #[strum(to_string = "CMYK")]
    Cmyk,
    #[strum(to_string = "CMY")]
    Cmy,
    #[strum(to_string = "{0} colour")]
    NChannel(u8),
    #[strum(to_string = "None")]
    Unknown,
}

impl ColorSpace {
    pub fn new(sig: Signature) -> Self {
        match sig.0 {
            0x5859_5A20 => ColorSpace::Xyz,
            0x4C61_6220 => ColorSpace::Lab,
            0x4C75_7620 => ColorSpace::Luv,
            0x5943_6272 => ColorSpace::YCbCr,
            0x5978_7920 => ColorSpace::Yxy,
            0x5247_4220 => ColorSpace::Rgb,
            0x4752_4159 => ColorSpace::Gray,
            0x4853_5620 => ColorSpace::Hsv,
            0x484C_5320 => ColorSpace::Hls,
            0x434D_594B => ColorSpace::Cmyk,
            0x434D_5920 => ColorSpace::Cmy,
            0x3243_4C52 => ColorSpace::NChannel(2),
            0x3343_4C52 => ColorSpace::NChannel(3),
            0x3443_4C52 => ColorSpace::NChannel(4),
            0x3543_4C52 => ColorSpace::NChannel(5),
            0x3643_4C52 => ColorSpace::NChannel(6),
            0x3743_4C52 => ColorSpace::NChannel(7),
            0x3843_4C52 => ColorSpace::NChannel(8),
            0x3943_4C52 => ColorSpace::NChannel(9),
            0x4143_4C52 => ColorSpace::NChannel(10),
            0x4243_4C52 => ColorSpace::NChannel(11),
            0x4343_4C52 => ColorSpace::NChannel(12),
            0x4443_4C52 => ColorSpace::NChannel(13),
            0x4543_4C52 => ColorSpace::NChannel(14),
            0x4643_4C52 => ColorSpace::NChannel(15),
            _ => ColorSpace::Unknown,
        }
    }
}
