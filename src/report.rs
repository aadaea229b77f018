// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable and JSON report rendering.

use std::fmt;

use crate::profile::Profile;
use crate::signatures::Signature;
use crate::tags::Element;

/// Renders `profile`, restricted to `signatures` if non-empty, as the
/// stable one-field-per-line text report.
pub struct Report<'a> {
    pub profile: &'a Profile,
    pub signatures: &'a [Signature],
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.profile.header;
        writeln!(f, "Profile size: {}", header.profile_size)?;
        writeln!(f, "Preferred CMM: {}", header.cmm)?;
        writeln!(f, "Version: {}", header.version)?;
        writeln!(f, "Device class: {}, {}", header.device_class_signature, header.device_class)?;
        writeln!(f, "Color space: {}, {}", header.color_space_signature, header.color_space)?;
        writeln!(f, "PCS: {}, {}", header.pcs_signature, header.pcs)?;
        match header.created {
            Some(created) => writeln!(f, "Created: {created}")?,
            None => writeln!(f, "Created: (null date)")?,
        }
        writeln!(
            f,
            "Primary platform: {}, {}",
            header.primary_platform_signature, header.primary_platform
        )?;
        writeln!(f, "Profile flags: 0x{:08X}", header.flags.raw)?;
        writeln!(f, "Manufacturer: {}", header.manufacturer)?;
        writeln!(f, "Model: {}", header.model)?;
        writeln!(f, "Device attributes: 0x{:016X}", header.attributes.raw)?;
        match header.rendering_intent {
            Some(intent) => writeln!(f, "Rendering intent: {intent}")?,
            None => writeln!(f, "Rendering intent: (unknown)")?,
        }
        writeln!(
            f,
            "PCS illuminant: X={:.4} Y={:.4} Z={:.4}",
            header.pcs_illuminant.x, header.pcs_illuminant.y, header.pcs_illuminant.z
        )?;
        writeln!(f, "Creator: {}", header.creator)?;
        writeln!(f, "Profile ID: {}", hex::encode(header.profile_id))?;

        let entries: Vec<_> = self.profile.tags_matching(self.signatures).collect();
        writeln!(f, "Tags: {}", entries.len())?;
        for entry in entries {
            writeln!(
                f,
                "  {} @ {} ({} bytes): {}",
                entry.signature,
                entry.offset,
                entry.size,
                describe(&entry.element)
            )?;
        }
        Ok(())
    }
}

fn describe(element: &Element) -> String {
    match element {
        Element::Xyz(xyz) => format!("{} XYZ value(s)", xyz.values.len()),
        Element::Curve(curve) => curve.kind.to_string(),
        Element::Parametric(curve) => format!("Parametric Function (type {})", curve.function_type),
        Element::Description(desc) => desc.ascii.clone(),
        Element::Text(text) => text.value.clone(),
        Element::MultiLocalizedUnicode(mluc) => {
            mluc.entries.values().next().cloned().unwrap_or_default()
        }
        Element::S15Fixed16Array(arr) => format!("{} value(s)", arr.values.len()),
        Element::Untyped { type_signature } => format!("Untyped ({type_signature})"),
        Element::Failed { type_signature, message } => {
            format!("Failed ({type_signature}): {message}")
        }
    }
}
