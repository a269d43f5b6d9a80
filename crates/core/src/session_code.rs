//! Session code generation.
//!
//! A session code is the only thing two participants share, so it has to
//! survive being read aloud, typed on a phone, or pasted into a chat.
//! Codes use digits and uppercase letters only. Uniqueness is enforced by
//! the database, not here, so callers must be prepared to regenerate on a
//! conflict.

use rand::Rng;

/// Length of a generated session code.
pub const CODE_LENGTH: usize = 8;

/// Characters a session code may contain.
pub const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a random session code.
pub fn generate_session_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}
