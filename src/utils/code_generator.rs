//! Short code generation.
//!
//! Codes come from a monotonically increasing counter encoded in base-62,
//! so uniqueness holds by construction and no collision check against the
//! store is needed. This replaces the classic random-with-retry scheme,
//! which needs a check-then-act loop and is a known source of races.

use std::sync::atomic::{AtomicU64, Ordering};

/// URL-safe alphabet: digits, uppercase, lowercase. No separators.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// First counter value whose base-62 encoding is 6 characters (62^5).
///
/// Starting here keeps every issued code in the 6-8 character range up to
/// 62^8 (~218 trillion) links.
const COUNTER_START: u64 = 916_132_832;

/// Counter-based short code generator.
///
/// `generate` is lock-free; concurrent callers each observe a distinct
/// counter value via `fetch_add`.
#[derive(Debug)]
pub struct CodeGenerator {
    next: AtomicU64,
}

impl CodeGenerator {
    /// Creates a generator starting at the first 6-character code.
    pub fn new() -> Self {
        Self::starting_at(COUNTER_START)
    }

    /// Creates a generator starting at an explicit counter value.
    ///
    /// Useful when a persistent backend remembers the last issued value.
    pub fn starting_at(value: u64) -> Self {
        Self {
            next: AtomicU64::new(value),
        }
    }

    /// Produces the next short code.
    pub fn generate(&self) -> String {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        encode_base62(value)
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a value in base-62, most significant digit first.
fn encode_base62(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(11);
    while value > 0 {
        buf.push(ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    buf.reverse();

    // ALPHABET is pure ASCII.
    String::from_utf8(buf).expect("base62 output is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encode_base62_zero() {
        assert_eq!(encode_base62(0), "0");
    }

    #[test]
    fn test_encode_base62_known_values() {
        assert_eq!(encode_base62(61), "z");
        assert_eq!(encode_base62(62), "10");
        assert_eq!(encode_base62(916_132_832), "100000");
    }

    #[test]
    fn test_generate_code_is_six_chars() {
        let generator = CodeGenerator::new();
        let code = generator.generate();
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generate_code_is_alphanumeric() {
        let generator = CodeGenerator::new();
        for _ in 0..100 {
            let code = generator.generate();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_produces_unique_codes() {
        let generator = CodeGenerator::new();
        let mut codes = HashSet::new();

        for _ in 0..10_000 {
            assert!(codes.insert(generator.generate()));
        }
    }

    #[test]
    fn test_generate_unique_across_threads() {
        use std::sync::Arc;

        let generator = Arc::new(CodeGenerator::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let generator = generator.clone();
            handles.push(std::thread::spawn(move || {
                (0..1000).map(|_| generator.generate()).collect::<Vec<_>>()
            }));
        }

        let mut codes = HashSet::new();
        for handle in handles {
            for code in handle.join().unwrap() {
                assert!(codes.insert(code));
            }
        }
        assert_eq!(codes.len(), 8000);
    }

    #[test]
    fn test_starting_at_resumes_sequence() {
        let generator = CodeGenerator::starting_at(62);
        assert_eq!(generator.generate(), "10");
        assert_eq!(generator.generate(), "11");
    }
}
