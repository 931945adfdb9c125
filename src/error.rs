//! The crate's only fallible surface: key, nonce, and digest-length widths
//! are byte- or 16-bit-bounded by contract, but a Rust slice does not
//! enforce that on its own. Every other public operation is infallible by
//! construction.

use thiserror::Error;

/// A reachable precondition violation at a key/nonce/digest-length
/// boundary.
///
/// These are not "ordinary" inputs — an oversized key, nonce, or requested
/// digest length is a genuine caller mistake distinct from the empty-input
/// edge cases the core treats as normal no-ops, and reporting it through
/// `Result` rather than panicking keeps ordinary-but-wrong caller input out
/// of "genuinely unreachable" panic territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `Cipher::setup`/`Cipher::setup_with_iv` key longer than 255 bytes.
    #[error("key length {0} exceeds the 255-byte limit of Cipher::setup")]
    KeyTooLong(usize),
    /// `Cipher::setup_with_iv` nonce longer than 255 bytes.
    #[error("nonce length {0} exceeds the 255-byte limit of Cipher::setup_with_iv")]
    NonceTooLong(usize),
    /// `Mac::setup` key longer than 65535 bytes.
    #[error("mac key length {0} exceeds the 65535-byte limit of Mac::setup")]
    MacKeyTooLong(usize),
    /// `Hash::finalize_into`/`Mac::finalize_into` output buffer longer than
    /// 255 bytes.
    #[error("digest length {0} exceeds the 255-byte limit of Spritz's absorb_byte(digest_len) binding")]
    DigestTooLong(usize),
}
