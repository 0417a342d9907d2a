//! Fast non-cryptographic hashing for cache keys
//!
//! 64-bit FNV-1a. Keys end up in the on-disk result cache, so the hash has
//! to be stable across processes and platforms; std's `DefaultHasher` makes
//! no such guarantee.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hash a byte slice with 64-bit FNV-1a.
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derive the cache key for an image source identifier (path or URL).
pub fn cache_key(source: &str) -> String {
    format!("{:016x}", fnv1a(source.as_bytes()))
}
