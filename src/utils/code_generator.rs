//! Short code generation.

use rand::Rng;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Alphabet for short codes: lowercase base-36.
const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random fixed-length short code.
///
/// Draws each character uniformly from the lowercase alphanumeric alphabet.
/// Uniqueness is not checked here; callers retry against the store's unique
/// constraint on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_fixed_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected character in code '{}'",
                code
            );
        }
    }

    #[test]
    fn test_generate_code_is_alphanumeric() {
        let code = generate_code();
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_spread() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 36^6 possible codes; 1000 draws colliding would indicate a broken RNG.
        assert!(codes.len() > 990);
    }
}
