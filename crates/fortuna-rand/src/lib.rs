// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # fortuna_rand
//!
//! The deterministic generator half of Fortuna (Ferguson & Schneier,
//! *Practical Cryptography*).
//!
//! A 256-bit key and a 128-bit counter produce an unbounded stream by
//! encrypting the incrementing counter. Every 2^16 blocks the key is replaced
//! with two further cipher blocks taken past the emitted output, so no key
//! ever covers more than 2^20 bytes.
//!
//! ## Core Types
//!
//! - [`Fortuna`]: the generator state machine
//! - [`FortunaState`]: persisted key, counter, rekey counter and lookahead
//! - [`Counter`]: 128-bit big-word-order counter with carry propagation
//! - `SharedFortuna`: mutex-guarded handle (`std` feature)
//!
//! ## Output adapters
//!
//! - [`Fortuna::generate`]: one raw 128-bit block as four `u32` words
//! - [`Fortuna::next_uniform`]: one `f64` per half block, with lookahead
//! - [`Fortuna::fill_ints`]: raw words in whole blocks, no lookahead
//!
//! ## Example
//!
//! ```rust
//! use fortuna_rand::Fortuna;
//!
//! let mut rng = Fortuna::from_seed(42).expect("Failed to Fortuna::from_seed(..)");
//!
//! let u = rng.next_uniform().expect("Failed to next_uniform()");
//! assert!(u >= 0.0);
//!
//! let words = rng.fill_ints(10).expect("Failed to fill_ints(..)");
//! assert_eq!(words.len(), 8);
//!
//! // Persist and resume.
//! let blob = rng.snapshot();
//! let mut resumed = Fortuna::new();
//! resumed.restore(&blob).expect("Failed to restore(..)");
//! assert_eq!(
//!     rng.generate().expect("Failed to generate() (source)"),
//!     resumed.generate().expect("Failed to generate() (resumed)"),
//! );
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod counter;
mod error;
mod generator;
mod ints;
#[cfg(feature = "std")]
mod shared;
mod state;
mod uniform;

pub use consts::{
    COUNTER_WORDS, DEFAULT_KEY_PAD, KEY_WORDS, REKEY_THRESHOLD, STATE_BYTES, STATE_WORDS,
    WORDS_PER_BLOCK,
};
pub use counter::Counter;
pub use error::FortunaError;
pub use generator::{Block, Fortuna};
#[cfg(feature = "std")]
pub use shared::SharedFortuna;
pub use state::FortunaState;
pub use uniform::{I2TO32, I2TO64M1, words_to_uniform};

pub use fortuna_cipher::{Aes256Cipher, BlockCipher, CipherError};
