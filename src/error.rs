// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The decoder's error taxonomy.
//!
//! `DecodeError` distinguishes profile-fatal failures (returned to the
//! caller, aborting the whole decode) from the field-local and tag-local
//! conditions that the walker and header decoder catch internally and
//! record as diagnostics instead of propagating.

use crate::signatures::Signature;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("truncated input: need {needed} more byte(s) at offset {offset}")]
    Truncated { offset: usize, needed: usize },

    #[error("not an ICC profile: file signature at offset 36 is not \"acsp\"")]
    NotAProfile,

    #[error("bad header field `{field}`: {message}")]
    BadHeaderField { field: &'static str, message: String },

    #[error("invalid creation date {year}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    BadDate {
        year: u16,
        month: u16,
        day: u16,
        hour: u16,
        minute: u16,
        second: u16,
    },

    #[error("parametric curve function type {function_type} is not in 0..=4")]
    BadParametric { function_type: u16 },

    #[error("tag `{signature}` failed to decode: {message}")]
    BadElement { signature: Signature, message: String },

    #[error("tag `{signature}` has unrecognized element type `{type_signature}`")]
    UnknownElementType {
        signature: Signature,
        type_signature: Signature,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
