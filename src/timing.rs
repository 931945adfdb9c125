//! Timing-safe utilities: constant-time buffer comparison, memory wiping,
//! and the branch-free comparison mask `crush` uses under
//! `safe-timing-crush`.

use zeroize::Zeroize;

use crate::ctx::Ctx;

/// Constant-time buffer equality.
///
/// Returns `0` iff `a` and `b` are equal (including the degenerate case of
/// two empty buffers); non-zero otherwise. Execution time depends only on
/// buffer length, never on buffer contents — no early return on the first
/// mismatching byte.
pub fn compare(a: &[u8], b: &[u8]) -> u8 {
    u8::from(!constant_time_eq::constant_time_eq(a, b))
}

/// Overwrite `buf` with zero bytes in a way that survives dead-store
/// elimination.
pub fn memzero(buf: &mut [u8]) {
    buf.zeroize();
}

/// Zero every field of a context, including any paranoid-wipe temporaries.
pub(crate) fn ctx_memzero(ctx: &mut Ctx) {
    ctx.zeroize();
}

/// Branch-free `a > b` test used by `crush` under `safe-timing-crush`.
///
/// Returns `0xFF` when `a > b`, `0x00` otherwise, computed without a
/// data-dependent branch.
#[cfg(feature = "safe-timing-crush")]
#[inline(always)]
pub(crate) fn gt_mask(a: u8, b: u8) -> u8 {
    let diff = (b as i32) - (a as i32);
    ((diff >> 31) & 0xff) as u8
}

/// No-op unless `wipe-after-use-paranoid` is enabled, in which case it
/// zeroes a single scratch byte that briefly held S-box or keystream
/// material.
#[inline(always)]
pub(crate) fn paranoid_wipe_byte(_value: &mut u8) {
    #[cfg(feature = "wipe-after-use-paranoid")]
    _value.zeroize();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_equal_is_zero() {
        assert_eq!(compare(b"\x01\x02\x03", b"\x01\x02\x03"), 0);
    }

    #[test]
    fn compare_mismatch_is_nonzero() {
        assert_ne!(compare(b"\x01\x02\x03", b"\x01\x02\x04"), 0);
    }

    #[test]
    fn compare_empty_is_zero_regardless_of_contents() {
        assert_eq!(compare(b"", b""), 0);
    }

    #[cfg(feature = "safe-timing-crush")]
    #[test]
    fn gt_mask_matches_comparison() {
        assert_eq!(gt_mask(5, 3), 0xff);
        assert_eq!(gt_mask(3, 5), 0x00);
        assert_eq!(gt_mask(4, 4), 0x00);
    }
}
