// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # fortuna_cipher
//!
//! The block cipher capability consumed by the Fortuna generator.
//!
//! The generator never looks inside the cipher. It needs exactly two
//! operations: build a schedule from a 256-bit key, and encrypt one
//! 128-bit block under that schedule. [`BlockCipher`] is that boundary.
//!
//! ## Core Types
//!
//! - [`Aes256Cipher`]: AES-256 backend (RustCrypto `aes`)
//!
//! ## Traits
//!
//! - [`BlockCipher`]: `set_key` + `encrypt_block`
//!
//! ## Example
//!
//! ```rust
//! use fortuna_cipher::{Aes256Cipher, BlockCipher};
//!
//! let mut cipher = Aes256Cipher::default();
//! cipher.set_key(&[0u8; 32]).expect("Failed to set_key(..)");
//!
//! let block = cipher.encrypt_block(&[0u8; 16]).expect("Failed to encrypt_block(..)");
//! assert_ne!(block, [0u8; 16]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod aes256;
mod consts;
mod error;
mod support;
mod traits;

pub use aes256::Aes256Cipher;
pub use consts::{BLOCK_SIZE, KEY_SIZE};
pub use error::CipherError;
pub use traits::BlockCipher;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
