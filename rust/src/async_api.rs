//! Async convenience API built on top of the sync requests.

use crate::{
    CanonicalRequest, Generated, IdgenError, NanoIdRequest, ProquintRequest, WordRequest,
};

/// Generate one NanoID in async contexts.
pub async fn async_nanoid(request: &NanoIdRequest) -> Result<Generated, IdgenError> {
    request.generate()
}

/// Generate one proquint in async contexts.
pub async fn async_proquint(request: &ProquintRequest) -> Result<Generated, IdgenError> {
    request.generate()
}

/// Canonically encode one value in async contexts.
pub async fn async_canonical(request: &CanonicalRequest) -> Result<Generated, IdgenError> {
    request.generate()
}

/// Pick one word in async contexts.
pub async fn async_word(request: &WordRequest) -> Generated {
    request.generate()
}

/// Generate a finite batch of NanoIDs as a vector.
///
/// A seeded request yields `count` identical ids.
pub async fn async_nanoid_batch(
    request: &NanoIdRequest,
    count: usize,
) -> Result<Vec<String>, IdgenError> {
    (0..count)
        .map(|_| request.generate().map(|g| g.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alphabet, is_proquint};
    use futures::executor::block_on;

    #[test]
    fn async_nanoid_default_is_valid() {
        let out = block_on(async_nanoid(&NanoIdRequest::default())).unwrap();
        assert_eq!(out.id.len(), 21);
    }

    #[test]
    fn async_proquint_is_valid() {
        let req = ProquintRequest {
            length: 11,
            ..Default::default()
        };
        let out = block_on(async_proquint(&req)).unwrap();
        assert!(is_proquint(&out.id));
    }

    #[test]
    fn async_canonical_matches_sync() {
        let req = CanonicalRequest {
            value: "127.0.0.1".to_string(),
            group_size: 0,
        };
        assert_eq!(block_on(async_canonical(&req)).unwrap().id, "lusab-babad");
    }

    #[test]
    fn async_word_is_from_list() {
        let req = WordRequest {
            seed: Some("0".to_string()),
            wordlist: vec!["b".into(), "a".into()],
        };
        assert_eq!(block_on(async_word(&req)).id, "a");
    }

    #[test]
    fn async_batch_count_matches() {
        let req = NanoIdRequest {
            alphabet: Alphabet::Alphanumeric,
            length: 16,
            ..Default::default()
        };
        let values = block_on(async_nanoid_batch(&req, 5)).unwrap();
        assert_eq!(values.len(), 5);
        assert!(values.iter().all(|v| v.len() == 16));
    }

    #[test]
    fn async_batch_propagates_errors() {
        let req = NanoIdRequest {
            length: 0,
            ..Default::default()
        };
        assert!(block_on(async_nanoid_batch(&req, 3)).is_err());
    }
}
