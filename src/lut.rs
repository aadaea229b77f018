// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `.spi1d` LUT sidecar writer.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::tags::Curve;

/// Renders `curve`'s samples as the `.spi1d` text format. Returns `None`
/// for an Identity or Gamma curve — only a sampled (`count > 1`) curve has
/// a LUT to extract.
pub fn render(curve: &Curve) -> Option<String> {
    if curve.samples.len() <= 1 {
        return None;
    }
    let mut out = String::new();
    writeln!(out, "Version 1").unwrap();
    writeln!(out, "From 0 1").unwrap();
    writeln!(out, "Length {}", curve.samples.len()).unwrap();
    writeln!(out, "Components 1").unwrap();
    writeln!(out, "{{").unwrap();
    for v in &curve.samples {
        writeln!(out, "  {v:.5}").unwrap();
    }
    write!(out, "}}").unwrap();
    Some(out)
}

/// Writes `curve` to `<dir>/<tag_signature>.spi1d`, returning the path
/// written, or `Ok(None)` if the curve has no LUT to extract.
pub fn write_sidecar(
    dir: &Path,
    tag_signature: &str,
    curve: &Curve,
) -> io::Result<Option<std::path::PathBuf>> {
    let Some(body) = render(curve) else {
        return Ok(None);
    };
    let path = dir.join(format!("{tag_signature}.spi1d"));
    std::fs::write(&path, body)?;
    Ok(Some(path))
}
