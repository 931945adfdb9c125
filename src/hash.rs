//! Variable-length cryptographic hash service.

use crate::ctx::Ctx;
use crate::error::Error;
#[cfg(feature = "wipe-after-use")]
use crate::timing::ctx_memzero;

const MAX_DIGEST_LEN: usize = u8::MAX as usize;

/// A streaming Spritz hash. Absorb input with any number of [`Hash::update`]
/// calls, then consume with [`Hash::finalize_into`].
///
/// One-shot [`hash_into`] is defined as `setup; update; finalize`, nothing
/// more — so it is automatically identical to any chunking of the same
/// streaming calls.
pub struct Hash {
    ctx: Ctx,
}

impl Default for Hash {
    fn default() -> Self {
        Self::new()
    }
}

impl Hash {
    /// Starts a fresh hash state.
    pub fn new() -> Self {
        Hash { ctx: Ctx::new() }
    }

    /// Absorbs more input. A no-op on an empty slice.
    pub fn update(&mut self, data: &[u8]) {
        self.ctx.absorb(data);
    }

    /// Binds the requested digest length into the state (so different
    /// lengths are unrelated, not prefixes of one another) and squeezes
    /// `out.len()` bytes.
    ///
    /// `out.len()` must fit in a byte, matching the width `absorb_byte`
    /// binds into the state. An oversized buffer is a reachable caller
    /// mistake, not an unreachable invariant violation, so it is reported
    /// through [`Error::DigestTooLong`] rather than a panic.
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

/// One-shot hash: `setup; update; finalize`.
pub fn hash_into(data: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut h = Hash::new();
    h.update(data);
    h.finalize_into(out)
}

/// `std`-only convenience: same as [`hash_into`] but allocates the digest.
#[cfg(feature = "std")]
pub fn hash(data: &[u8], digest_len: u8) -> std::vec::Vec<u8> {
    let mut out = std::vec![0u8; digest_len as usize];
    hash_into(data, &mut out).expect("digest_len is a u8, always within the 255-byte bound");
    out
}
