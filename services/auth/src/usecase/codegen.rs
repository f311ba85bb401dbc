use rand::RngExt;

use crate::domain::types::{ONE_TIME_CODE_MAX, ONE_TIME_CODE_MIN, SESSION_ID_LEN};

/// Charset for session identifiers (lowercase base36).
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate an opaque session identifier.
///
/// `rand::rng()` is a CSPRNG; 16 base36 characters give roughly 82 bits of entropy.
/// Collisions are not checked for.
pub fn new_session_id() -> String {
    let mut rng = rand::rng();
    (0..SESSION_ID_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Generate a six-digit one-time code, uniform over `100000..=999999`.
pub fn new_one_time_code() -> u32 {
    rand::rng().random_range(ONE_TIME_CODE_MIN..=ONE_TIME_CODE_MAX)
}
