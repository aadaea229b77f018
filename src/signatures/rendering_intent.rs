// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The rendering intent at header offset 64..68.
///
/// Unlike the other header signatures, this field is a small closed
/// enumeration: any value outside `{0,1,2,3}` has no `Unknown`
/// variant to fall back to, so the header records it as `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, serde::Serialize)]
#[repr(u32)]
pub enum RenderingIntent {
    #[strum(to_string = "Perceptual")]
    Perceptual = 0,
    #[strum(to_string = "Media-relative colorimetric")]
    MediaRelativeColorimetric = 1,
    #[strum(to_string = "Saturation")]
    Saturation = 2,
    #[strum(to_string = "ICC-absolute colorimetric")]
    AbsoluteColorimetric = 3,
}

impl RenderingIntent {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(RenderingIntent::Perceptual),
            1 => Some(RenderingIntent::MediaRelativeColorimetric),
            2 => Some(RenderingIntent::Saturation),
            3 => Some(RenderingIntent::AbsoluteColorimetric),
            _ => None,
        }
    }
}
