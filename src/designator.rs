//! Campaign designator generation.
//!
//! A designator is the short public token that identifies a campaign in
//! tracking URLs. It is minted exactly once, right after the campaign row is
//! first inserted and its auto-increment id is known. Entropy comes from a
//! random value, the wall clock at microsecond resolution and the row id,
//! digested through xxh64 and rendered as unpadded base-32.

use xxhash_rust::xxh64::xxh64;

/// Fixed marker so designator-origin tokens are recognizable in logs and URLs.
pub const DESIGNATOR_PREFIX: &str = "dc";

/// Column limit on `campaigns.designator`.
pub const MAX_DESIGNATOR_LEN: usize = 28;

// RFC 4648 base-32, no padding. Every character is URL-safe.
const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

// 64 bits / 5 bits per character, rounded up.
const BODY_LEN: usize = 13;

/// Generate a designator for a freshly inserted campaign row.
///
/// The token is `dc` followed by a fixed 13-character base-32 body, 15
/// characters total. Uniqueness is probabilistic: the digest input mixes
/// process randomness, the current time and the row id, so two campaigns only
/// collide if xxh64 collides on distinct seeds.
pub fn generate_designator(campaign_id: i64) -> String {
    let seed = format!(
        "{}-{}-{}",
        rand::random::<u64>(),
        chrono::Utc::now().timestamp_micros(),
        campaign_id
    );
    format!("{}{}", DESIGNATOR_PREFIX, encode_base32(xxh64(seed.as_bytes(), 0)))
}

/// Whether a string looks like a generated designator. Does not guarantee the
/// campaign exists; inflow rows carry unchecked designator strings by design.
pub fn is_designator(token: &str) -> bool {
    token.len() <= MAX_DESIGNATOR_LEN
        && token.starts_with(DESIGNATOR_PREFIX)
        && token[DESIGNATOR_PREFIX.len()..]
            .bytes()
            .all(|b| BASE32_ALPHABET.contains(&b))
        && token.len() > DESIGNATOR_PREFIX.len()
}

fn encode_base32(mut value: u64) -> String {
    let mut body = [0u8; BODY_LEN];
    for slot in body.iter_mut().rev() {
        *slot = BASE32_ALPHABET[(value & 0x1f) as usize];
        value >>= 5;
    }
    // Alphabet bytes are ASCII, so this cannot fail.
    String::from_utf8_lossy(&body).into_owned()
}
