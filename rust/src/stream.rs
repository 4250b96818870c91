//! Deterministic byte stream driven by a 64-bit seed.
//!
//! The generator is SplitMix64, pinned here so that seeded output never
//! changes across crate or platform versions. It is not cryptographically
//! secure and must not be used for secret-bearing identifiers.

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 word generator. Iterates forever.
#[derive(Debug, Clone)]
pub struct SeededStream {
    state: u64,
}

impl SeededStream {
    pub fn new(seed: i64) -> Self {
        Self { state: seed as u64 }
    }

    /// Next 64-bit word.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Fill `buf` with words written little-endian; a trailing partial word
    /// contributes its low-order bytes.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

impl Iterator for SeededStream {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_u64())
    }
}

/// `length` deterministic bytes for `seed`.
pub fn seeded_bytes(seed: i64, length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    SeededStream::new(seed).fill_bytes(&mut bytes);
    bytes
}
