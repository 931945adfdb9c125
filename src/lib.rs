//! Spritz reference implementation.
//!
//! Spritz (Rivest & Schuldt, 2014) is a sponge-like permutation over a
//! 256-byte state that this crate turns into three services built on the
//! same internal state machine: a keyed (optionally nonced) stream cipher
//! ([`cipher::Cipher`]), a variable-length hash ([`hash::Hash`]), and a MAC
//! ([`mac::Mac`]).
//!
//! This is a Spritz *reference* implementation, not a general-purpose
//! cryptographic toolkit: Spritz has received far less cryptanalysis than
//! stream ciphers in widespread production use, and its S-box is indexed
//! by secret data, so this crate makes no claim of resistance to
//! cache-timing attacks — it targets small microcontrollers without data
//! caches, not shared hosts. [`compare`] is constant-time in buffer
//! contents; `crush` is constant-time in S-box contents under the default
//! `safe-timing-crush` feature. Neither claim extends to cache-timing on
//! platforms with a data cache — that limitation is inherent to Spritz's
//! design, not an implementation gap.
//!
//! No authenticated-encryption mode is defined, there is no
//! associated-data MAC, and there is no internal parallelism — the state
//! is inherently sequential, so a single [`cipher::Cipher`]/[`hash::Hash`]/
//! [`mac::Mac`] value must not be shared across threads without external
//! synchronization. Distinct values are fully independent.
//!
//! # Feature flags
//!
//! - `std` (default): enables the allocating one-shot convenience
//!   functions ([`hash::hash`], [`mac::mac`]).
//! - `safe-timing-crush` (default): branch-free `crush` comparisons.
//!   Disabling it is for side-by-side study only, never for production use.
//! - `wipe-after-use` (default): one-shot [`hash::hash_into`]/
//!   [`mac::mac_into`] zero their internal state before returning.
//! - `wipe-after-use-paranoid`: implies the two flags above; additionally
//!   zeroes every primitive-operation temporary that transiently holds an
//!   S-box or keystream byte.
//! - `logging`: emits `log::trace!` lifecycle events (setup, forced
//!   shuffle). Off by default — the facade itself is `no_std`-safe, so
//!   turning it on costs nothing when no logger is installed.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod ctx;
mod timing;

pub mod cipher;
pub mod error;
pub mod hash;
pub mod mac;

pub use cipher::Cipher;
pub use error::Error;
pub use hash::Hash;
pub use mac::Mac;
pub use timing::{compare, memzero};
