//! Seed interpretation.
//!
//! Any caller input is classified, in priority order, as an IPv4 address,
//! a decimal integer, or an opaque string hashed with FNV-1a 64.

use serde::Serialize;
use std::net::Ipv4Addr;
use tracing::debug;

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 1_099_511_628_211;

/// Largest value that is encoded canonically in four bytes.
pub const CANONICAL_U32_MAX: u64 = 0xFFFF_FFFF;

/// A 64-bit seed and whether its bytes should be encoded as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Seed {
    pub value: i64,
    pub direct_encode: bool,
}

impl Seed {
    /// A seed that drives the pseudo-random stream.
    pub fn random(value: i64) -> Self {
        Self {
            value,
            direct_encode: false,
        }
    }

    /// A seed whose value is encoded directly.
    pub fn direct(value: i64) -> Self {
        Self {
            value,
            direct_encode: true,
        }
    }

    /// Seed value reinterpreted as unsigned.
    pub fn as_u64(self) -> u64 {
        self.value as u64
    }
}

/// Hash bytes with FNV-1a 64.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Interpret an arbitrary string as a seed.
pub fn interpret(input: &str) -> Seed {
    if let Ok(ip) = input.parse::<Ipv4Addr>() {
        let seed = Seed::direct(i64::from(u32::from(ip)));
        debug!(input, seed = seed.value, "seed interpreted as IPv4 address");
        return seed;
    }

    if let Ok(value) = input.parse::<i64>() {
        let in_u32 = (0..=CANONICAL_U32_MAX as i64).contains(&value);
        debug!(input, seed = value, direct = in_u32, "seed interpreted as integer");
        return Seed {
            value,
            direct_encode: in_u32,
        };
    }

    let seed = Seed::random(fnv1a64(input.as_bytes()) as i64);
    debug!(input, seed = seed.value, "seed hashed with fnv1a64");
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv_published_vectors() {
        assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a64(b"hello world"), 0x779a_65e7_023c_d2e7);
    }

    #[test]
    fn test_ipv4_is_direct() {
        assert_eq!(interpret("127.0.0.1"), Seed::direct(2_130_706_433));
        assert_eq!(interpret("192.168.1.1"), Seed::direct(3_232_235_777));
        assert_eq!(interpret("10.0.0.1"), Seed::direct(167_772_161));
        assert_eq!(interpret("255.255.255.255"), Seed::direct(4_294_967_295));
        assert_eq!(interpret("0.0.0.0"), Seed::direct(0));
    }

    #[test]
    fn test_u32_range_integers_are_direct() {
        assert_eq!(interpret("0"), Seed::direct(0));
        assert_eq!(interpret("42"), Seed::direct(42));
        assert_eq!(interpret("00042"), Seed::direct(42));
        assert_eq!(interpret("+42"), Seed::direct(42));
        assert_eq!(interpret("1000000"), Seed::direct(1_000_000));
        assert_eq!(interpret("4294967295"), Seed::direct(4_294_967_295));
    }

    #[test]
    fn test_out_of_range_integers_seed_the_stream() {
        assert_eq!(interpret("4294967296"), Seed::random(4_294_967_296));
        assert_eq!(interpret("9223372036854775807"), Seed::random(i64::MAX));
        assert_eq!(interpret("-1"), Seed::random(-1));
        assert_eq!(interpret("-9223372036854775808"), Seed::random(i64::MIN));
    }

    #[test]
    fn test_strings_are_hashed() {
        for input in ["", "hello", "my-app-prod", "42abc", "42.5", "2001:db8::1"] {
            let seed = interpret(input);
            assert_eq!(seed.value, fnv1a64(input.as_bytes()) as i64, "{input}");
            assert!(!seed.direct_encode, "{input}");
        }
        assert_eq!(interpret("").value, -3_750_763_034_362_895_579);
    }

    #[test]
    fn test_overflowing_numbers_fall_through_to_hash() {
        let seed = interpret("99999999999999999999");
        assert!(!seed.direct_encode);
        assert_eq!(seed.value, fnv1a64(b"99999999999999999999") as i64);
        assert!(!interpret("256.256.256.256").direct_encode);
    }

    #[test]
    fn test_interpret_is_deterministic() {
        for input in ["seed-4711", "127.0.0.1", "-5", ""] {
            assert_eq!(interpret(input), interpret(input));
        }
    }
}
