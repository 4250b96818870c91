//! Proquint (PROnounceable QUINTuplet) codec.
//!
//! Every 16-bit big-endian halfword becomes one consonant-vowel-consonant-
//! vowel-consonant word; words are joined with `-`.
//!
//! ```text
//! bit  15..12  11..10  9..6  5..4  3..0
//!       con     vow    con   vow   con
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

use crate::error::IdgenError;
use crate::grouping::SEPARATOR;
use crate::seed::{CANONICAL_U32_MAX, Seed};
use crate::stream::seeded_bytes;

const CONSONANTS: [u8; 16] = *b"bdfghjklmnprstvz";
const VOWELS: [u8; 4] = *b"aiou";

/// Characters in one proquint word.
pub const WORD_LEN: usize = 5;
/// Canonical character length of a 4-byte value.
pub const CANONICAL_LEN_32: usize = 11;
/// Canonical character length of an 8-byte value.
pub const CANONICAL_LEN_64: usize = 23;

static PROQUINT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[bdfghjklmnprstvz][aiou][bdfghjklmnprstvz][aiou][bdfghjklmnprstvz](?:-[bdfghjklmnprstvz][aiou][bdfghjklmnprstvz][aiou][bdfghjklmnprstvz])*$").unwrap()
});

static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:0[xX])?([0-9a-fA-F]{1,16})$").unwrap());

static NEGATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\d+$").unwrap());

fn push_word(out: &mut String, half: u16) {
    out.push(CONSONANTS[usize::from(half >> 12) & 0xF] as char);
    out.push(VOWELS[usize::from(half >> 10) & 0x3] as char);
    out.push(CONSONANTS[usize::from(half >> 6) & 0xF] as char);
    out.push(VOWELS[usize::from(half >> 4) & 0x3] as char);
    out.push(CONSONANTS[usize::from(half) & 0xF] as char);
}

/// Encode one 16-bit value as a single word.
pub fn encode_word(half: u16) -> String {
    let mut out = String::with_capacity(WORD_LEN);
    push_word(&mut out, half);
    out
}

/// Encode bytes as dash-joined words.
///
/// An odd-length input is read as if a zero byte were prepended, so the
/// big-endian value is preserved.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let padded;
    let bytes = if bytes.len() % 2 == 1 {
        padded = [&[0u8][..], bytes].concat();
        &padded[..]
    } else {
        bytes
    };

    let words = bytes.len() / 2;
    let mut out = String::with_capacity(words * (WORD_LEN + 1));
    for (i, pair) in bytes.chunks_exact(2).enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        push_word(&mut out, u16::from_be_bytes([pair[0], pair[1]]));
    }
    out
}

/// Big-endian bytes of `value` at its canonical width (4 or 8).
pub fn canonical_bytes(value: u64) -> Vec<u8> {
    if value > CANONICAL_U32_MAX {
        value.to_be_bytes().to_vec()
    } else {
        (value as u32).to_be_bytes().to_vec()
    }
}

/// Canonical character length for `value`: 11 or 23.
pub fn canonical_len(value: u64) -> usize {
    if value > CANONICAL_U32_MAX {
        CANONICAL_LEN_64
    } else {
        CANONICAL_LEN_32
    }
}

/// Canonical encoding: minimal 4- or 8-byte width.
pub fn encode_canonical(value: u64) -> String {
    encode_bytes(&canonical_bytes(value))
}

/// Encode `value` at a requested byte length.
///
/// Shorter lengths keep the least-significant bytes, longer lengths
/// left-pad with zeros. Zero or the canonical width yields the canonical
/// encoding.
pub fn encode_with_pad_truncate(value: u64, requested: usize) -> String {
    let canonical = canonical_bytes(value);
    let width = canonical.len();

    if requested == 0 || requested == width {
        return encode_bytes(&canonical);
    }

    if requested < width {
        return encode_bytes(&canonical[width - requested..]);
    }

    let mut padded = vec![0u8; requested];
    padded[requested - width..].copy_from_slice(&canonical);
    encode_bytes(&padded)
}

/// Whether `s` is a well-formed dash-joined proquint.
pub fn is_proquint(s: &str) -> bool {
    PROQUINT_PATTERN.is_match(s)
}

fn index_of(table: &[u8], c: u8) -> Option<u16> {
    table.iter().position(|&t| t == c).map(|i| i as u16)
}

fn decode_word(word: &str) -> Option<u16> {
    let b = word.as_bytes();
    if b.len() != WORD_LEN {
        return None;
    }
    Some(
        (index_of(&CONSONANTS, b[0])? << 12)
            | (index_of(&VOWELS, b[1])? << 10)
            | (index_of(&CONSONANTS, b[2])? << 6)
            | (index_of(&VOWELS, b[3])? << 4)
            | index_of(&CONSONANTS, b[4])?,
    )
}

/// Decode dash-joined words back to bytes.
pub fn decode(s: &str) -> Result<Vec<u8>, IdgenError> {
    if s.is_empty() {
        return Err(IdgenError::InvalidProquint(s.to_string()));
    }

    let mut bytes = Vec::with_capacity((s.len() + 1) / (WORD_LEN + 1) * 2);
    for word in s.split(SEPARATOR) {
        let half = decode_word(word).ok_or_else(|| IdgenError::InvalidProquint(s.to_string()))?;
        bytes.extend_from_slice(&half.to_be_bytes());
    }
    Ok(bytes)
}

/// Decode a canonical 2- or 4-word proquint to its integer value.
pub fn decode_canonical(s: &str) -> Result<u64, IdgenError> {
    let bytes = decode(s)?;
    match bytes.len() {
        4 => Ok(u64::from(u32::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ]))),
        8 => {
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes);
            Ok(u64::from_be_bytes(word))
        }
        _ => Err(IdgenError::InvalidProquint(s.to_string())),
    }
}

/// Parse a value for canonical encoding.
///
/// Accepts an IPv4 address, an unsigned decimal integer, or up to 16 hex
/// digits with an optional `0x` prefix.
pub fn parse_canonical_value(input: &str) -> Result<u64, IdgenError> {
    let s = input.trim();

    if let Ok(ip) = s.parse::<Ipv4Addr>() {
        return Ok(u64::from(u32::from(ip)));
    }
    if let Ok(value) = s.parse::<u64>() {
        return Ok(value);
    }
    if let Some(caps) = HEX_PATTERN.captures(s) {
        if let Ok(value) = u64::from_str_radix(&caps[1], 16) {
            return Ok(value);
        }
    }
    if s.parse::<Ipv6Addr>().is_ok() {
        return Err(IdgenError::Ipv6NotSupported(input.to_string()));
    }
    if NEGATIVE_PATTERN.is_match(s) {
        return Err(IdgenError::NegativeCanonicalValue(input.to_string()));
    }
    Err(IdgenError::InvalidCanonicalValue(input.to_string()))
}

/// Byte length for a requested character length; at least one word.
pub fn proquint_byte_length(char_length: usize) -> usize {
    ((char_length + 1) / (WORD_LEN + 1) * 2).max(2)
}

/// Generate a proquint of `byte_length` bytes.
///
/// A direct-encode seed is encoded as-is (padded or truncated to
/// `byte_length`), any other seed drives the deterministic stream, and no
/// seed draws from the thread-local CSPRNG.
pub fn generate_proquint(byte_length: usize, seed: Option<Seed>) -> String {
    match seed {
        Some(seed) if seed.direct_encode => {
            debug!(seed = seed.value, byte_length, "proquint direct encode");
            encode_with_pad_truncate(seed.as_u64(), byte_length)
        }
        Some(seed) => {
            debug!(seed = seed.value, byte_length, "proquint seeded stream");
            encode_bytes(&seeded_bytes(seed.value, byte_length))
        }
        None => {
            let mut bytes = vec![0u8; byte_length];
            rand::fill(&mut bytes[..]);
            encode_bytes(&bytes)
        }
    }
}
