//! Validated generation requests.
//!
//! These are the entry points a front end calls: they apply the length
//! policy and defaults, interpret seeds, and report advisory [`Warning`]s
//! next to the generated id instead of failing.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::error::IdgenError;
use crate::grouping::{SEPARATOR, regroup};
use crate::nano_id::{Alphabet, DEFAULT_LENGTH, generate_nanoid};
use crate::proquint::{
    canonical_len, encode_canonical, generate_proquint, parse_canonical_value,
    proquint_byte_length,
};
use crate::seed::interpret;
use crate::words::{random_word, select_word};

/// Minimum accepted identifier length.
pub const MIN_LENGTH: usize = 1;
/// Maximum accepted identifier length.
pub const MAX_LENGTH: usize = 1024;
/// Lengths above this are accepted with a warning.
pub const WARN_LENGTH: usize = 128;

/// Advisory conditions that never block generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    LongLength {
        length: usize,
        threshold: usize,
    },
    NonCanonicalLength {
        seed: String,
        canonical: usize,
        requested: usize,
        truncated: bool,
    },
    SeededNotSecure,
    AlphabetContainsSeparator,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LongLength { length, threshold } => write!(
                f,
                "length {length} is unusually long (above {threshold}); check this is intended"
            ),
            Self::NonCanonicalLength {
                seed,
                canonical,
                requested,
                truncated,
            } => write!(
                f,
                "seed '{seed}' encodes canonically to {canonical} characters but length={requested} was requested; \
                 output will be {} (use length {canonical} or canonical encoding for the standard form)",
                if *truncated { "truncated" } else { "zero-padded" }
            ),
            Self::SeededNotSecure => f.write_str(
                "seeded identifiers are predictable; never use them for passwords, tokens or other secrets",
            ),
            Self::AlphabetContainsSeparator => f.write_str(
                "alphabet contains '-' while grouping is enabled; separators will be ambiguous",
            ),
        }
    }
}

/// A generated identifier plus any advisory warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated {
    pub id: String,
    pub warnings: Vec<Warning>,
}

/// Apply the length policy.
pub fn validate_length(length: usize) -> Result<Option<Warning>, IdgenError> {
    if length < MIN_LENGTH {
        return Err(IdgenError::LengthTooShort {
            length,
            min: MIN_LENGTH,
        });
    }
    if length > MAX_LENGTH {
        return Err(IdgenError::LengthTooLong {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok((length > WARN_LENGTH).then_some(Warning::LongLength {
        length,
        threshold: WARN_LENGTH,
    }))
}

/// NanoID request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NanoIdRequest {
    pub alphabet: Alphabet,
    pub length: usize,
    pub seed: Option<String>,
    pub group_size: usize,
}

impl Default for NanoIdRequest {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Readable,
            length: DEFAULT_LENGTH,
            seed: None,
            group_size: 0,
        }
    }
}

impl NanoIdRequest {
    pub fn generate(&self) -> Result<Generated, IdgenError> {
        let mut warnings: Vec<Warning> = validate_length(self.length)?.into_iter().collect();

        let alphabet = self.alphabet.as_str();
        if self.group_size > 0 && alphabet.contains(SEPARATOR) {
            warnings.push(Warning::AlphabetContainsSeparator);
        }

        let seed = self.seed.as_deref().map(|s| interpret(s).value);
        if seed.is_some() {
            warnings.push(Warning::SeededNotSecure);
        }

        let id = generate_nanoid(alphabet, self.length, seed, self.group_size)?;
        Ok(Generated { id, warnings })
    }
}

/// Proquint request; `length` is in characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProquintRequest {
    pub length: usize,
    pub seed: Option<String>,
    pub group_size: usize,
}

impl ProquintRequest {
    pub fn generate(&self) -> Result<Generated, IdgenError> {
        let mut warnings: Vec<Warning> = validate_length(self.length)?.into_iter().collect();
        let byte_length = proquint_byte_length(self.length);

        let seed = self.seed.as_deref().map(|raw| {
            let seed = interpret(raw);
            if seed.direct_encode {
                let canonical = canonical_len(seed.as_u64());
                if self.length != canonical {
                    warnings.push(Warning::NonCanonicalLength {
                        seed: raw.to_string(),
                        canonical,
                        requested: self.length,
                        truncated: self.length < canonical,
                    });
                }
            }
            warnings.push(Warning::SeededNotSecure);
            seed
        });

        debug!(length = self.length, byte_length, "proquint request");
        let id = generate_proquint(byte_length, seed);
        let id = if self.group_size > 0 {
            regroup(&id, self.group_size)
        } else {
            id
        };
        Ok(Generated { id, warnings })
    }
}

/// Canonical proquint request for an IPv4 address, integer or hex value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalRequest {
    pub value: String,
    pub group_size: usize,
}

impl CanonicalRequest {
    pub fn generate(&self) -> Result<Generated, IdgenError> {
        let value = parse_canonical_value(&self.value)?;
        let id = encode_canonical(value);
        let id = if self.group_size > 0 {
            regroup(&id, self.group_size)
        } else {
            id
        };
        Ok(Generated {
            id,
            warnings: Vec::new(),
        })
    }
}

/// Word request; an empty `wordlist` selects from the built-in list and a
/// missing seed picks at random.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordRequest {
    pub seed: Option<String>,
    pub wordlist: Vec<String>,
}

impl WordRequest {
    pub fn generate(&self) -> Generated {
        match &self.seed {
            Some(seed) => Generated {
                id: select_word(seed, &self.wordlist),
                warnings: vec![Warning::SeededNotSecure],
            },
            None => Generated {
                id: random_word(&self.wordlist),
                warnings: Vec::new(),
            },
        }
    }
}
