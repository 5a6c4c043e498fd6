use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::domain::types::{CODE_LEN, SLOT_MILLIS, TimeSlot};

/// Map a wall-clock instant to its verification slot. Euclidean division
/// keeps the flooring correct even for pre-epoch instants, so frozen test
/// clocks can sit anywhere on the time line.
pub fn slot_at(now: DateTime<Utc>) -> TimeSlot {
    now.timestamp_millis().div_euclid(SLOT_MILLIS)
}

/// Derive the 6-digit verification code for `(email, slot, secret)`.
///
/// The input buffer is `"{email}-{slot}-{secret}"`, hashed with SHA-256; the
/// digest's hex rendition is scanned left to right and the first six decimal
/// digits form the code (a nibble below 10 renders as a decimal digit, so
/// the scan works on nibbles directly). If a digest is too digit-sparse to
/// supply six, the buffer is re-hashed with a round counter appended until
/// enough digits are collected, keeping the function total and deterministic
/// without ever padding from a non-derived source.
pub fn derive_code(email: &str, slot: TimeSlot, secret: &str) -> String {
    let mut code = String::with_capacity(CODE_LEN);
    let mut round: u32 = 0;
    loop {
        let input = if round == 0 {
            format!("{email}-{slot}-{secret}")
        } else {
            format!("{email}-{slot}-{secret}#{round}")
        };
        let digest = Sha256::digest(input.as_bytes());
        for byte in digest {
            for nibble in [byte >> 4, byte & 0x0f] {
                if nibble < 10 {
                    code.push(char::from(b'0' + nibble));
                    if code.len() == CODE_LEN {
                        return code;
                    }
                }
            }
        }
        round += 1;
    }
}
