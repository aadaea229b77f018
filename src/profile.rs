// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The whole decoded document.

use crate::error::Result;
use crate::header::Header;
use crate::tags::{walk_tag_table, TagEntry};

/// Owns one [`Header`] and its tag table, populated by a single
/// [`Profile::decode`] pass over an immutable input buffer; read-only
/// afterwards. There is no re-entrant decode on the same instance — the
/// state progression `Empty → HeaderDecoded → TagsDecoded → Reported` is
/// realized by this one constructor rather than by mutable transitions.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Profile {
    pub header: Header,
    pub tags: Vec<TagEntry>,
}

impl Profile {
    /// Decodes the header, then the tag table and every tag's referenced
    /// element. Fatal only on a truncated or non-ICC header; every
    /// other failure is field- or tag-local and recorded inline.
    pub fn decode(buffer: &[u8]) -> Result<Self> {
        let header = Header::decode(buffer)?;
        if (buffer.len() as u64) < header.profile_size as u64 {
            log::warn!(
                "profile declares size {} but buffer is only {} bytes",
                header.profile_size,
                buffer.len()
            );
        }
        let tags = walk_tag_table(buffer)?;
        Ok(Profile { header, tags })
    }

    /// The tags whose signature is in `signatures`, preserving table
    /// order — backs the CLI's `-t` filter.
    pub fn tags_matching<'a>(
        &'a self,
        signatures: &'a [crate::signatures::Signature],
    ) -> impl Iterator<Item = &'a TagEntry> + 'a {
        self.tags
            .iter()
            .filter(move |entry| signatures.is_empty() || signatures.contains(&entry.signature))
    }
}
