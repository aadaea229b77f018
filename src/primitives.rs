// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless big-endian primitive readers.
//!
//! Every reader advances a `&mut &[u8]` cursor in place and returns
//! `Truncated` rather than panicking when the remaining slice is too short
//! — the fix relative to the naive `split_at`-based readers this crate's
//! decoders are otherwise modeled on, which panic on a short input instead
//! of erroring.

use crate::error::{DecodeError, Result};
use crate::signatures::Signature;

fn take<'a>(input: &mut &'a [u8], offset: usize, n: usize) -> Result<&'a [u8]> {
    if input.len() < n {
        return Err(DecodeError::Truncated {
            offset,
            needed: n - input.len(),
        });
    }
    let (head, rest) = input.split_at(n);
    *input = rest;
    Ok(head)
}

pub fn read_u8(input: &mut &[u8], offset: usize) -> Result<u8> {
    Ok(take(input, offset, 1)?[0])
}

pub fn read_be_u16(input: &mut &[u8], offset: usize) -> Result<u16> {
    let bytes = take(input, offset, 2)?;
    Ok(u16::from_be_bytes(bytes.try_into().unwrap()))
}

pub fn read_be_u32(input: &mut &[u8], offset: usize) -> Result<u32> {
    let bytes = take(input, offset, 4)?;
    Ok(u32::from_be_bytes(bytes.try_into().unwrap()))
}

pub fn read_be_i32(input: &mut &[u8], offset: usize) -> Result<i32> {
    let bytes = take(input, offset, 4)?;
    Ok(i32::from_be_bytes(bytes.try_into().unwrap()))
}

pub fn read_be_u64(input: &mut &[u8], offset: usize) -> Result<u64> {
    let bytes = take(input, offset, 8)?;
    Ok(u64::from_be_bytes(bytes.try_into().unwrap()))
}

pub fn read_signature(input: &mut &[u8], offset: usize) -> Result<Signature> {
    let bytes = take(input, offset, 4)?;
    Ok(Signature::from_be_bytes(bytes.try_into().unwrap()))
}

/// signed 32-bit two's-complement value divided by 2^16.
pub fn s15fixed16_to_f64(raw: i32) -> f64 {
    raw as f64 / 65536.0
}

pub fn f64_to_s15fixed16(value: f64) -> i32 {
    (value * 65536.0).round() as i32
}

/// unsigned 16-bit value divided by 2^8.
pub fn u8fixed8_to_f64(raw: u16) -> f64 {
    raw as f64 / 256.0
}

pub fn read_s15fixed16(input: &mut &[u8], offset: usize) -> Result<f64> {
    Ok(s15fixed16_to_f64(read_be_i32(input, offset)?))
}

pub fn read_ascii_string(input: &mut &[u8], offset: usize, n: usize) -> Result<String> {
    let bytes = take(input, offset, n)?;
    Ok(String::from_utf8_lossy(bytes)
        .trim_end_matches('\0')
        .to_string())
}

pub fn read_utf16be_string(input: &mut &[u8], offset: usize, n_bytes: usize) -> Result<String> {
    let bytes = take(input, offset, n_bytes)?;
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect();
    String::from_utf16(&units)
        .map(|s| s.trim_end_matches('\0').to_string())
        .map_err(|e| DecodeError::BadHeaderField {
            field: "utf16",
            message: e.to_string(),
        })
}
