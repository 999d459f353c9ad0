// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-256 backend.

use core::fmt;

use aes::Aes256;
use aes::Block as AesBlock;
use aes::cipher::{BlockEncrypt, KeyInit};

use crate::consts::BLOCK_SIZE;
use crate::error::CipherError;
use crate::traits::BlockCipher;

/// AES-256 block cipher.
///
/// Starts without a schedule. The expanded key is zeroized on drop and on
/// every `set_key` (through the `aes` crate's `zeroize` feature).
#[derive(Default)]
pub struct Aes256Cipher {
    schedule: Option<Aes256>,
}

impl Aes256Cipher {
    /// Creates a backend keyed with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeySize`] if `key` is not 32 bytes long.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let mut cipher = Self::default();
        cipher.set_key(key)?;

        Ok(cipher)
    }

    /// Returns `true` once a schedule has been built.
    #[inline]
    pub fn is_keyed(&self) -> bool {
        self.schedule.is_some()
    }
}

impl fmt::Debug for Aes256Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes256Cipher")
            .field("keyed", &self.is_keyed())
            .finish_non_exhaustive()
    }
}

impl BlockCipher for Aes256Cipher {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let schedule = Aes256::new_from_slice(key).map_err(|_| CipherError::InvalidKeySize)?;
        self.schedule = Some(schedule);

        Ok(())
    }

    fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> Result<[u8; BLOCK_SIZE], CipherError> {
        let schedule = self.schedule.as_ref().ok_or(CipherError::KeyNotSet)?;

        let mut buf = AesBlock::clone_from_slice(block);
        schedule.encrypt_block(&mut buf);

        let mut out = [0u8; BLOCK_SIZE];
        out.copy_from_slice(&buf);

        Ok(out)
    }
}
