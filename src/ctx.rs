//! The Spritz state container and its primitive mixing / sponge operations.
//!
//! `Ctx` is crate-private: callers never see a bare state value, only the
//! three services built on top of it (`Cipher`, `Hash`, `Mac`), the way
//! `codahale-cyclist` keeps its permutation state internal to its duplex
//! types.

use zeroize::Zeroize;

use crate::timing::paranoid_wipe_byte;
#[cfg(feature = "safe-timing-crush")]
use crate::timing::gt_mask;

pub(crate) const N: usize = 256;
const HALF_N: u8 = (N / 2) as u8;

/// The Spritz state: a byte permutation of `0..256` plus six scalar
/// registers, all arithmetic implicitly mod 256.
#[derive(Zeroize)]
pub(crate) struct Ctx {
    s: [u8; N],
    i: u8,
    j: u8,
    k: u8,
    z: u8,
    a: u8,
    w: u8,
}

impl Ctx {
    /// Identity permutation, registers cleared, `w` set to 1 (odd, as
    /// required by the `whip`/`update` stride).
    pub(crate) fn new() -> Self {
        let mut s = [0u8; N];
        for (idx, byte) in s.iter_mut().enumerate() {
            *byte = idx as u8;
        }
        Ctx { s, i: 0, j: 0, k: 0, z: 0, a: 0, w: 1 }
    }

    /// Debug-only sanity check of the invariants that must hold after every
    /// public call. Compiled out in release builds.
    #[cfg(debug_assertions)]
    pub(crate) fn check_invariants(&self) {
        let mut seen = [false; N];
        for &b in self.s.iter() {
            debug_assert!(!seen[b as usize], "s must stay a permutation of 0..256");
            seen[b as usize] = true;
        }
        debug_assert_eq!(self.w & 1, 1, "w must stay odd");
        debug_assert!(self.a as usize <= N / 2, "a must stay within [0, N/2]");
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub(crate) fn check_invariants(&self) {}

    #[inline(always)]
    fn swap(&mut self, x: u8, y: u8) {
        self.s.swap(x as usize, y as usize);
    }

    /// One mixing step: advances `i`, re-derives `j` and `k` from the
    /// current S-box, and swaps the two touched positions.
    fn update(&mut self) {
        self.i = self.i.wrapping_add(self.w);
        let mut s_i = self.s[self.i as usize];
        let j_idx = self.j.wrapping_add(s_i);
        let mut s_j = self.s[j_idx as usize];
        self.j = self.k.wrapping_add(s_j);
        let mut s_j2 = self.s[self.j as usize];
        self.k = self.i.wrapping_add(self.k).wrapping_add(s_j2);
        self.swap(self.i, self.j);
        paranoid_wipe_byte(&mut s_i);
        paranoid_wipe_byte(&mut s_j);
        paranoid_wipe_byte(&mut s_j2);
    }

    /// `update`, `r` times, then advance the odd stride `w` by 2 — `w`
    /// starts at 1 and only ever grows by 2, so it stays odd and hence
    /// coprime with N=256, which is what gives `update` full-period
    /// coverage of the S-box.
    fn whip(&mut self, rounds: usize) {
        for _ in 0..rounds {
            self.update();
        }
        self.w = self.w.wrapping_add(2);
    }

    #[cfg(feature = "safe-timing-crush")]
    fn crush(&mut self) {
        for p in 0..HALF_N {
            let q = (N as u8 - 1).wrapping_sub(p);
            let mut sp = self.s[p as usize];
            let mut sq = self.s[q as usize];
            let mask = gt_mask(sp, sq);
            let new_p = (sp & !mask) | (sq & mask);
            let new_q = (sq & !mask) | (sp & mask);
            self.s[p as usize] = new_p;
            self.s[q as usize] = new_q;
            paranoid_wipe_byte(&mut sp);
            paranoid_wipe_byte(&mut sq);
        }
    }

    #[cfg(not(feature = "safe-timing-crush"))]
    fn crush(&mut self) {
        for p in 0..HALF_N {
            let q = (N as u8 - 1).wrapping_sub(p);
            if self.s[p as usize] > self.s[q as usize] {
                self.swap(p, q);
            }
        }
    }

    /// The expensive reseeding step: three rounds of `whip(2N)` interleaved
    /// with two `crush` passes, breaking correlations between absorbed
    /// input and future keystream. Must run whenever `a` saturates and at
    /// every absorb/squeeze boundary.
    fn shuffle(&mut self) {
        self.whip(2 * N);
        self.crush();
        self.whip(2 * N);
        self.crush();
        self.whip(2 * N);
        self.a = 0;
        #[cfg(feature = "logging")]
        log::trace!("spritz: forced shuffle");
    }

    fn absorb_nibble(&mut self, x: u8) {
        if self.a == HALF_N {
            self.shuffle();
        }
        self.swap(self.a, HALF_N.wrapping_add(x));
        self.a = self.a.wrapping_add(1);
    }

    /// Absorbs a byte low nibble first, then high nibble.
    pub(crate) fn absorb_byte(&mut self, b: u8) {
        self.absorb_nibble(b & 0x0f);
        self.absorb_nibble((b >> 4) & 0x0f);
        self.check_invariants();
    }

    pub(crate) fn absorb(&mut self, data: &[u8]) {
        for &b in data {
            self.absorb_byte(b);
        }
    }

    /// A domain separator between adjacent logical inputs (key/nonce,
    /// data/length, ...).
    pub(crate) fn absorb_stop(&mut self) {
        if self.a == HALF_N {
            self.shuffle();
        }
        self.a = self.a.wrapping_add(1);
        self.check_invariants();
    }

    fn output(&mut self) -> u8 {
        let mut t0 = self.s[self.z.wrapping_add(self.k) as usize];
        let mut t1 = self.s[self.i.wrapping_add(t0) as usize];
        self.z = self.s[self.j.wrapping_add(t1) as usize];
        paranoid_wipe_byte(&mut t0);
        paranoid_wipe_byte(&mut t1);
        self.z
    }

    /// One keystream byte. Forces a `shuffle` first whenever `a > 0`, so
    /// squeezing always starts from a freshly reseeded state.
    pub(crate) fn drip(&mut self) -> u8 {
        if self.a > 0 {
            self.shuffle();
        }
        self.update();
        let byte = self.output();
        self.check_invariants();
        byte
    }
}

#[cfg(test)]
impl Ctx {
    fn is_permutation(&self) -> bool {
        let mut seen = [false; N];
        for &b in self.s.iter() {
            if seen[b as usize] {
                return false;
            }
            seen[b as usize] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn invariants_hold_after_arbitrary_absorb_and_drip_sequences(
            key in proptest::collection::vec(any::<u8>(), 0..64),
            ops in proptest::collection::vec(
                (any::<bool>(), proptest::collection::vec(any::<u8>(), 0..16)),
                0..32,
            ),
        ) {
            let mut ctx = Ctx::new();
            ctx.absorb(&key);
            prop_assert!(ctx.is_permutation());
            for (squeeze, bytes) in ops {
                if squeeze {
                    let rounds = bytes.len().max(1);
                    for _ in 0..rounds {
                        ctx.drip();
                    }
                } else {
                    ctx.absorb(&bytes);
                }
                prop_assert!(ctx.is_permutation());
                prop_assert_eq!(ctx.w & 1, 1);
                prop_assert!(ctx.a as usize <= N / 2);
            }
        }
    }

    #[test]
    fn initialize_is_identity_permutation() {
        let ctx = Ctx::new();
        for (idx, &b) in ctx.s.iter().enumerate() {
            assert_eq!(b as usize, idx);
        }
        assert_eq!(ctx.w, 1);
        assert_eq!(ctx.a, 0);
    }

    #[test]
    fn absorb_of_empty_key_is_a_no_op() {
        let mut ctx = Ctx::new();
        let before = ctx.s;
        ctx.absorb(&[]);
        assert_eq!(ctx.s, before);
        assert_eq!(ctx.a, 0);
    }

    #[test]
    fn drip_stream_matches_paper_vector_for_key_abc() {
        let mut ctx = Ctx::new();
        ctx.absorb(b"ABC");
        let expect = [0x77u8, 0x9a, 0x8e, 0x01, 0xf9, 0xe9, 0xcb, 0xc0];
        for want in expect {
            assert_eq!(ctx.drip(), want);
        }
    }
}
