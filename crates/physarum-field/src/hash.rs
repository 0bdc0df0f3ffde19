//! FNV-1a digests over trail values.
//!
//! Used to compare runs for determinism: two controllers built from the
//! same configuration and seed must produce identical digests tick for
//! tick. Not cryptographically secure.

/// FNV-1a offset basis for 64-bit.
pub const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
pub fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
pub fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Digest a slice of `f32` by bit pattern, prefixed with its length.
pub fn digest_f32(values: &[f32]) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, values.len() as u64);
    for &v in values {
        hash = fnv1a_u32(hash, v.to_bits());
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_digest_is_not_offset() {
        // The length prefix is always folded in.
        assert_ne!(digest_f32(&[]), FNV_OFFSET);
        assert_eq!(digest_f32(&[]), digest_f32(&[]));
    }

    #[test]
    fn order_matters() {
        assert_ne!(digest_f32(&[0.1, 0.2]), digest_f32(&[0.2, 0.1]));
    }

    #[test]
    fn trailing_zero_changes_digest() {
        assert_ne!(digest_f32(&[0.5]), digest_f32(&[0.5, 0.0]));
    }

    #[test]
    fn single_byte_matches_reference() {
        // FNV-1a 64 of the single byte 0x61 ('a').
        assert_eq!(fnv1a_byte(FNV_OFFSET, b'a'), 0xaf63dc4c8601ec8c);
    }
}
