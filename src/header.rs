// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 128-byte fixed profile header.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use zerocopy::{BigEndian, FromBytes, Immutable, KnownLayout, Unaligned, I32, U16, U32, U64};

use crate::error::{DecodeError, Result};
use crate::signatures::{ColorSpace, DeviceClass, Platform, RenderingIntent, Signature};
use crate::xyz::Xyz;

pub const HEADER_SIZE: usize = 128;
const FILE_SIGNATURE: u32 = 0x6163_7370; // "acsp"

/// Byte-exact overlay of the 128-byte ICC header, used only to pick off the
/// fixed-width numeric fields; string/XYZ/date fields are read separately
/// through the primitive readers so every field goes through one consistent
/// fallible path.
#[repr(C)]
#[derive(FromBytes, KnownLayout, Unaligned, Immutable)]
struct HeaderLayout {
    profile_size: U32<BigEndian>,
    cmm: [u8; 4],
    version: [u8; 4],
    device_class: [u8; 4],
    color_space: [u8; 4],
    pcs: [u8; 4],
    created: [U16<BigEndian>; 6],
    file_signature: U32<BigEndian>,
    primary_platform: [u8; 4],
    flags: U32<BigEndian>,
    manufacturer: [u8; 4],
    model: [u8; 4],
    attributes: U64<BigEndian>,
    rendering_intent: U32<BigEndian>,
    pcs_illuminant: [I32<BigEndian>; 3],
    creator: [u8; 4],
    profile_id: [u8; 16],
    _reserved: [u8; 28],
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub bugfix: u8,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

/// Profile flags: bit 0 = embedded, bit 1 = embedded-independent.
/// The remaining bits are reserved and carried verbatim in `raw`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ProfileFlags {
    pub embedded: bool,
    pub embedded_independent: bool,
    pub raw: u32,
}

impl ProfileFlags {
    fn from_raw(raw: u32) -> Self {
        ProfileFlags {
            embedded: raw & 1 != 0,
            embedded_independent: raw & 0b10 != 0,
            raw,
        }
    }
}

/// Device attributes: transparency/matte/negative/black-and-white
/// flags in the low 4 bits, carried verbatim in `raw`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DeviceAttributes {
    pub transparency: bool,
    pub matte: bool,
    pub negative: bool,
    pub black_and_white: bool,
    pub raw: u64,
}

impl DeviceAttributes {
    fn from_raw(raw: u64) -> Self {
        DeviceAttributes {
            transparency: raw & 1 != 0,
            matte: raw & 0b10 != 0,
            negative: raw & 0b100 != 0,
            black_and_white: raw & 0b1000 != 0,
            raw,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Header {
    pub profile_size: u32,
    pub cmm: Signature,
    pub version: Version,
    pub device_class: DeviceClass,
    pub device_class_signature: Signature,
    pub color_space: ColorSpace,
    pub color_space_signature: Signature,
    pub pcs: ColorSpace,
    pub pcs_signature: Signature,
    /// `None` when the creation-date fields do not form a valid calendar
    /// date; this is field-local and non-fatal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,
    pub primary_platform: Platform,
    pub primary_platform_signature: Signature,
    pub flags: ProfileFlags,
    pub manufacturer: Signature,
    pub model: Signature,
    pub attributes: DeviceAttributes,
    /// `None` when the raw value is not one of the four defined intents
    /// This is field-local and non-fatal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendering_intent: Option<RenderingIntent>,
    pub pcs_illuminant: Xyz,
    pub creator: Signature,
    pub profile_id: [u8; 16],
}

impl Header {
    /// Decodes the 128-byte header. Fatal on truncation or a bad
    /// file signature; every other field failure is field-local and
    /// recorded as a diagnostic rather than aborting the decode.
    pub fn decode(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < HEADER_SIZE {
            return Err(DecodeError::Truncated {
                offset: buffer.len(),
                needed: HEADER_SIZE - buffer.len(),
            });
        }
        let layout = HeaderLayout::ref_from_bytes(&buffer[..HEADER_SIZE])
            .expect("HeaderLayout matches the fixed 128-byte header exactly");

        if layout.file_signature.get() != FILE_SIGNATURE {
            return Err(DecodeError::NotAProfile);
        }

        let version_bytes = layout.version;
        let version = Version {
            major: version_bytes[0],
            minor: version_bytes[1] >> 4,
            bugfix: version_bytes[1] & 0x0F,
        };

        let device_class_signature = Signature::from_be_bytes(layout.device_class);
        let color_space_signature = Signature::from_be_bytes(layout.color_space);
        let pcs_signature = Signature::from_be_bytes(layout.pcs);
        let primary_platform_signature = Signature::from_be_bytes(layout.primary_platform);

        let created = decode_creation_date(&layout.created);

        let rendering_intent_raw = layout.rendering_intent.get();
        let rendering_intent = RenderingIntent::from_u32(rendering_intent_raw).or_else(|| {
            log::warn!(
                "header: rendering_intent value {rendering_intent_raw} is not in 0..=3, recording as absent"
            );
            None
        });

        let [ix, iy, iz] = layout.pcs_illuminant.map(|v| crate::primitives::s15fixed16_to_f64(v.get()));
        let pcs_illuminant = Xyz { x: ix, y: iy, z: iz };

        Ok(Header {
            profile_size: layout.profile_size.get(),
            cmm: Signature::from_be_bytes(layout.cmm),
            version,
            device_class: DeviceClass::new(device_class_signature),
            device_class_signature,
            color_space: ColorSpace::new(color_space_signature),
            color_space_signature,
            pcs: ColorSpace::new(pcs_signature),
            pcs_signature,
            created,
            primary_platform: Platform::new(primary_platform_signature),
            primary_platform_signature,
            flags: ProfileFlags::from_raw(layout.flags.get()),
            manufacturer: Signature::from_be_bytes(layout.manufacturer),
            model: Signature::from_be_bytes(layout.model),
            attributes: DeviceAttributes::from_raw(layout.attributes.get()),
            rendering_intent,
            pcs_illuminant,
            creator: Signature::from_be_bytes(layout.creator),
            profile_id: layout.profile_id,
        })
    }
}

/// Builds a calendar date/time from the six raw header fields, returning
/// `None` (a "Null date") rather than panicking when the
/// fields do not form a valid date — using `chrono`'s `_opt` constructors,
/// unlike this crate's own non-`_opt` ancestor which would panic here.
fn decode_creation_date(raw: &[U16<BigEndian>; 6]) -> Option<NaiveDateTime> {
    let [year, month, day, hour, minute, second] = raw.map(|v| v.get());
    let parsed = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
        .and_then(|date| NaiveTime::from_hms_opt(hour as u32, minute as u32, second as u32).map(|time| (date, time)));
    match parsed {
        Some((date, time)) => Some(NaiveDateTime::new(date, time)),
        None => {
            let err = DecodeError::BadDate { year, month, day, hour, minute, second };
            log::warn!("header: {err}, recording a null date");
            None
        }
    }
}
