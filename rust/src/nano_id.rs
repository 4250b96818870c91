//! NanoID-style random strings over an arbitrary alphabet.

use rand::random_range;
use tracing::debug;

use crate::error::IdgenError;
use crate::grouping::group;
use crate::stream::SeededStream;

/// `a-z`, `A-Z`, `0-9`.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// `0-9`.
pub const NUMERIC: &str = "0123456789";
/// Alphanumeric without the easily confused `0 O 1 l I`.
pub const READABLE: &str = "23456789abcdefghkmnpqrstwxyzABCDEFGHJKLMNPQRSTWXYZ";

/// Default identifier length.
pub const DEFAULT_LENGTH: usize = 21;

/// Largest ASCII alphabet handed to the `nanoid` crate's mask sampler.
const NANOID_MAX_ALPHABET: usize = u8::MAX as usize;

/// Draw set for generation: a named preset or a custom string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Alphabet {
    Alphanumeric,
    Numeric,
    #[default]
    Readable,
    Custom(String),
}

impl Alphabet {
    /// Resolve a preset name; anything else is a custom alphabet.
    pub fn parse(s: &str) -> Self {
        match s {
            "alphanumeric" => Self::Alphanumeric,
            "numeric" => Self::Numeric,
            "readable" => Self::Readable,
            _ => Self::Custom(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Numeric => NUMERIC,
            Self::Readable => READABLE,
            Self::Custom(s) => s,
        }
    }
}

/// Characters to draw so that grouping by `group_size` yields `length`
/// characters including separators. When `length` is a multiple of
/// `group_size + 1` the grouped result is one character longer.
pub fn internal_length(length: usize, group_size: usize) -> usize {
    // grouping leaves strings no longer than group_size untouched
    if group_size == 0 || group_size >= length {
        return length;
    }
    // ceil((length * g + 1) / (g + 1))
    (length * group_size + 1).div_ceil(group_size + 1)
}

fn draw_secure(chars: &[char], alphabet: &str, n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    if alphabet.is_ascii() && chars.len() <= NANOID_MAX_ALPHABET {
        return nanoid::format(nanoid::rngs::default, chars, n);
    }
    (0..n).map(|_| chars[random_range(0..chars.len())]).collect()
}

fn draw_seeded(chars: &[char], seed: i64, n: usize) -> String {
    let len = chars.len() as u64;
    SeededStream::new(seed)
        .take(n)
        .map(|word| chars[(word % len) as usize])
        .collect()
}

/// Generate an identifier of `length` characters.
///
/// With `group_size > 0` the result contains separators and `length`
/// counts them. Without a seed characters come from a cryptographically
/// secure source; with one the output is reproducible and not secure.
pub fn generate_nanoid(
    alphabet: &str,
    length: usize,
    seed: Option<i64>,
    group_size: usize,
) -> Result<String, IdgenError> {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(IdgenError::EmptyAlphabet);
    }

    let n = internal_length(length, group_size);
    debug!(length, internal = n, group_size, seeded = seed.is_some(), "nanoid");

    let id = match seed {
        Some(seed) => draw_seeded(&chars, seed, n),
        None => draw_secure(&chars, alphabet, n),
    };

    Ok(if group_size > 0 { group(&id, group_size) } else { id })
}
