//! idgen: short identifiers as NanoIDs, Proquints or dictionary words,
//! either random or reproducibly derived from a seed.
//!
//! # Seeds
//!
//! Any input string becomes a 64-bit seed. IPv4 addresses and integers in
//! `0..=4294967295` are encoded directly; other integers and arbitrary
//! strings (hashed with FNV-1a 64) drive a deterministic byte stream.
//! Seeded output is reproducible, and therefore never secret.
//!
//! # Example
//!
//! ```
//! use idgen::{encode_canonical, generate_nanoid, group, NUMERIC};
//!
//! assert_eq!(encode_canonical(0x7f00_0001), "lusab-babad");
//! assert_eq!(group("abcdefghij", 4), "abcd-efgh-ij");
//!
//! let id = generate_nanoid(NUMERIC, 12, Some(42), 0).expect("non-empty alphabet");
//! assert_eq!(id, generate_nanoid(NUMERIC, 12, Some(42), 0).unwrap());
//! ```

mod async_api;
mod error;
mod grouping;
mod nano_id;
mod proquint;
mod request;
mod seed;
mod stream;
mod words;

pub use async_api::{async_canonical, async_nanoid, async_nanoid_batch, async_proquint, async_word};
pub use error::IdgenError;
pub use grouping::{SEPARATOR, group, regroup, strip_separators};
pub use nano_id::{
    ALPHANUMERIC, Alphabet, DEFAULT_LENGTH, NUMERIC, READABLE, generate_nanoid, internal_length,
};
pub use proquint::{
    CANONICAL_LEN_32, CANONICAL_LEN_64, canonical_bytes, canonical_len, decode, decode_canonical,
    encode_bytes, encode_canonical, encode_with_pad_truncate, encode_word, generate_proquint,
    is_proquint, parse_canonical_value, proquint_byte_length,
};
pub use request::{
    CanonicalRequest, Generated, MAX_LENGTH, MIN_LENGTH, NanoIdRequest, ProquintRequest,
    WARN_LENGTH, Warning, WordRequest, validate_length,
};
pub use seed::{CANONICAL_U32_MAX, FNV_OFFSET_BASIS, FNV_PRIME, Seed, fnv1a64, interpret};
pub use stream::{SeededStream, seeded_bytes};
pub use words::{default_words, load_words, parse_wordlist, random_word, select_word};
