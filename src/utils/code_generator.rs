//! Shortcode generation.

use rand::Rng;

/// Alphabet for generated shortcodes: `[a-zA-Z0-9]`.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length used when the caller does not pick one.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random shortcode of exactly `length` characters, each drawn
/// independently and uniformly from the 62-character alphanumeric alphabet.
///
/// A zero `length` falls back to [`DEFAULT_CODE_LENGTH`]. The result is not
/// checked for uniqueness; that is the caller's responsibility.
pub fn generate_code(length: usize) -> String {
    let length = if length == 0 {
        DEFAULT_CODE_LENGTH
    } else {
        length
    };

    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
