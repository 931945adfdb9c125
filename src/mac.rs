//! Message authentication code service.

use crate::ctx::Ctx;
use crate::error::Error;
#[cfg(feature = "wipe-after-use")]
use crate::timing::ctx_memzero;

const MAX_MAC_KEY_LEN: usize = u16::MAX as usize;
const MAX_DIGEST_LEN: usize = u8::MAX as usize;

/// A streaming Spritz MAC. Unlike [`crate::hash::Hash`], the key is bound
/// in at setup time with a 16-bit width (up to 65535 bytes) — callers must
/// not truncate a long key.
pub struct Mac {
    ctx: Ctx,
}

impl Mac {
    /// Absorbs the key, then a domain-separating `absorb_stop` before any
    /// message bytes.
    pub fn setup(key: &[u8]) -> Result<Self, Error> {
        if key.len() > MAX_MAC_KEY_LEN {
            return Err(Error::MacKeyTooLong(key.len()));
        }
        let mut ctx = Ctx::new();
        ctx.absorb(key);
        ctx.absorb_stop();
        Ok(Mac { ctx })
    }

    /// Absorbs more message bytes. A no-op on an empty slice.
    pub fn update(&mut self, msg: &[u8]) {
        self.ctx.absorb(msg);
    }

    /// Domain-separates, binds the tag length, then squeezes the tag.
    ///
    /// An oversized `out` is a reachable caller mistake, not an
    /// unreachable invariant violation, so it is reported through
    /// [`Error::DigestTooLong`] rather than a panic.
    pub fn finalize_into(mut self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() > MAX_DIGEST_LEN {
            return Err(Error::DigestTooLong(out.len()));
        }
        self.ctx.absorb_stop();
        self.ctx.absorb_byte(out.len() as u8);
        for byte in out.iter_mut() {
            *byte = self.ctx.drip();
        }
        #[cfg(feature = "wipe-after-use")]
        ctx_memzero(&mut self.ctx);
        Ok(())
    }
}

/// One-shot MAC: `setup; update; finalize`.
pub fn mac_into(key: &[u8], msg: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut m = Mac::setup(key)?;
    m.update(msg);
    m.finalize_into(out)
}

/// `std`-only convenience: same as [`mac_into`] but allocates the tag.
#[cfg(feature = "std")]
pub fn mac(key: &[u8], msg: &[u8], digest_len: u8) -> Result<std::vec::Vec<u8>, Error> {
    let mut out = std::vec![0u8; digest_len as usize];
    mac_into(key, msg, &mut out)?;
    Ok(out)
}

/// Constant-time MAC verification: compares a computed tag against a
/// caller-supplied one without leaking timing information about where the
/// mismatch (if any) occurs.
pub fn verify(tag: &[u8], expected: &[u8]) -> bool {
    crate::timing::compare(tag, expected) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_deterministic_for_the_same_key_and_message() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        mac_into(b"key", b"message", &mut a).unwrap();
        mac_into(b"key", b"message", &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_bit_key_flip_changes_the_tag() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        mac_into(&[0x00], &[0x00], &mut a).unwrap();
        mac_into(&[0x01], &[0x00], &mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn streaming_update_matches_one_shot() {
        let key = b"mac key";
        let msg = b"the quick brown fox jumps over the lazy dog";
        let mut whole = [0u8; 32];
        mac_into(key, msg, &mut whole).unwrap();

        let mut streamed = Mac::setup(key).unwrap();
        for chunk in msg.chunks(5) {
            streamed.update(chunk);
        }
        let mut out = [0u8; 32];
        streamed.finalize_into(&mut out).unwrap();
        assert_eq!(out, whole);
    }

    #[test]
    fn oversized_digest_buffer_is_reported_not_panicked() {
        let mac = Mac::setup(b"key").unwrap();
        let mut out = vec![0u8; 256];
        assert!(matches!(
            mac.finalize_into(&mut out),
            Err(Error::DigestTooLong(256))
        ));
    }

    #[test]
    fn verify_accepts_matching_tags_and_rejects_others() {
        let mut tag = [0u8; 32];
        mac_into(b"key", b"message", &mut tag).unwrap();
        assert!(verify(&tag, &tag));
        let mut forged = tag;
        forged[0] ^= 0x01;
        assert!(!verify(&tag, &forged));
    }

    #[test]
    fn oversized_key_is_reported_not_truncated() {
        let key = vec![0u8; 70_000];
        assert!(matches!(
            Mac::setup(&key),
            Err(Error::MacKeyTooLong(70_000))
        ));
    }
}
