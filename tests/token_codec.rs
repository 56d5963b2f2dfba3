use qrpass::crypto::token::{self, TAG_SIZE};
use qrpass::models::payload::TokenPayload;

const ZERO_KEY: [u8; 32] = [0u8; 32];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        let tag = token::derive_hex(&ZERO_KEY, "abc123", "1000000000");
        assert_eq!(
            tag,
            "836c19310250b4cd31a8adb99f54b864fc5c5f8bbe3e0a8b50d7e898a0f73ca9"
        );
        assert_eq!(tag.len(), TAG_SIZE * 2);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let first = token::derive(&ZERO_KEY, "abc123", "1000000000");
        for _ in 0..5 {
            assert_eq!(token::derive(&ZERO_KEY, "abc123", "1000000000"), first);
        }
    }

    #[test]
    fn test_any_input_change_changes_tag() {
        let base = token::derive(&ZERO_KEY, "abc123", "1000000000");

        let mut other_key = ZERO_KEY;
        other_key[31] = 1;

        assert_ne!(token::derive(&other_key, "abc123", "1000000000"), base);
        assert_ne!(token::derive(&ZERO_KEY, "abc124", "1000000000"), base);
        assert_ne!(token::derive(&ZERO_KEY, "abc123", "1000000001"), base);
    }

    #[test]
    fn test_no_collisions_across_timestamps() {
        let mut tags: Vec<[u8; TAG_SIZE]> = (0..200)
            .map(|ts| token::derive(&ZERO_KEY, "abc123", &ts.to_string()))
            .collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), 200);
    }

    #[test]
    fn test_field_boundary_is_part_of_message() {
        // "ab" + ":" + "c1" differs from "a" + ":" + "bc1" only by the separator position.
        assert_ne!(
            token::derive(&ZERO_KEY, "ab", "c1"),
            token::derive(&ZERO_KEY, "a", "bc1")
        );
    }

    #[test]
    fn test_tokens_match() {
        let expected = token::derive_hex(&ZERO_KEY, "abc123", "1000000000");

        assert!(token::tokens_match(&expected, &expected));
        assert!(!token::tokens_match(&expected[..63], &expected));
        assert!(!token::tokens_match("", &expected));
        assert!(!token::tokens_match(&expected.to_uppercase(), &expected));
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = TokenPayload::sign(&ZERO_KEY, "abc123", 1_000_000_000);
        assert_eq!(
            payload.to_string(),
            "abc123,1000000000,836c19310250b4cd31a8adb99f54b864fc5c5f8bbe3e0a8b50d7e898a0f73ca9"
        );
    }

    #[test]
    fn test_keys_of_any_length() {
        // Short keys are zero-padded, block-sized keys used as-is, long keys hashed first.
        let cases: [(Vec<u8>, &str); 3] = [
            (
                b"k".to_vec(),
                "8572e2ca069bb4bcc9e3fb1fa6ab83a6277b16d0316e9fab95ed80bfef4186d4",
            ),
            (
                (0..64).collect(),
                "830f2790f58e50640d2405f7d03105d90468152eed0d2b3590f467ef7c6eb934",
            ),
            (
                (0..100).collect(),
                "709410c278a58f70df744d9bb3793af0c130052209a016091faf1539173d8b06",
            ),
        ];

        for (key, expected) in cases {
            assert_eq!(
                token::derive_hex(&key, "abc123", "1000000000"),
                expected,
                "key length {}",
                key.len()
            );
        }
    }
}
