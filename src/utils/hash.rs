//! Content-hash fingerprints using blake3.
//!
//! Variant ids and export filenames are derived from content so that
//! identical inputs always name the same artifact.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let id = hash::fingerprint("some content"); // -> "a1b2c3d4e5f6"
//! ```

/// Compute blake3 hash and return the first 12 hex chars.
///
/// Used for cache-correct artifact naming: content changes → name changes.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(content: &T) -> String {
    let hash = blake3::hash(content.as_ref());
    hash.to_hex()[..12].to_string()
}

/// Compute a 64-bit blake3 hash (for quick equality checks).
#[inline]
#[allow(dead_code)]
pub fn compute<T: AsRef<[u8]> + ?Sized>(content: &T) -> u64 {
    let hash = blake3::hash(content.as_ref());
    let bytes = hash.as_bytes();
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}
