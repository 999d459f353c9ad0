// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block cipher trait definitions.

use crate::consts::BLOCK_SIZE;
use crate::error::CipherError;

/// 128-bit block cipher keyed with a 256-bit key.
///
/// The schedule derived by [`set_key`](BlockCipher::set_key) is owned by the
/// implementation and is never exported.
pub trait BlockCipher {
    /// Rebuilds the key schedule from `key`.
    ///
    /// On error the previous schedule (if any) must remain in effect.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeySize`] if `key` is not
    /// [`KEY_SIZE`](crate::KEY_SIZE) bytes long.
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;

    /// Encrypts a single block under the current schedule.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::KeyNotSet`] if no schedule exists yet.
    fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> Result<[u8; BLOCK_SIZE], CipherError>;
}
