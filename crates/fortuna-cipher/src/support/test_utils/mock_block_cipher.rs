// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::aes256::Aes256Cipher;
use crate::consts::BLOCK_SIZE;
use crate::error::CipherError;
use crate::traits::BlockCipher;

/// Configurable behavior for [`MockBlockCipher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBlockCipherBehaviour {
    /// Normal operation (delegates to AES-256).
    None,
    /// Fail set_key on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthSetKey(usize),
    /// Fail encrypt_block on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthEncrypt(usize),
}

/// Mock block cipher for testing.
///
/// Wraps [`Aes256Cipher`] but allows simulating failures via [`MockBlockCipherBehaviour`].
#[derive(Debug, Default)]
pub struct MockBlockCipher {
    inner: Aes256Cipher,
    behaviour: Option<MockBlockCipherBehaviour>,
    set_key_count: Cell<usize>,
    encrypt_count: Cell<usize>,
}

impl MockBlockCipher {
    /// Creates a new mock cipher with the specified behavior.
    pub fn new(behaviour: MockBlockCipherBehaviour) -> Self {
        Self {
            inner: Aes256Cipher::default(),
            behaviour: Some(behaviour),
            set_key_count: Cell::new(0),
            encrypt_count: Cell::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockBlockCipherBehaviour) {
        self.behaviour = Some(behaviour);
    }

    /// Resets both call counters.
    pub fn reset_count(&self) {
        self.set_key_count.set(0);
        self.encrypt_count.set(0);
    }

    /// Returns the number of `set_key` calls so far.
    pub fn set_key_count(&self) -> usize {
        self.set_key_count.get()
    }

    /// Returns the number of `encrypt_block` calls so far.
    pub fn encrypt_count(&self) -> usize {
        self.encrypt_count.get()
    }

    fn behaviour(&self) -> MockBlockCipherBehaviour {
        self.behaviour.unwrap_or(MockBlockCipherBehaviour::None)
    }
}

impl BlockCipher for MockBlockCipher {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let current = self.set_key_count.get();
        self.set_key_count.set(current + 1);

        match self.behaviour() {
            MockBlockCipherBehaviour::FailAtNthSetKey(n) if current + 1 == n => {
                Err(CipherError::InvalidKeySize)
            }
            _ => self.inner.set_key(key),
        }
    }

    fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> Result<[u8; BLOCK_SIZE], CipherError> {
        let current = self.encrypt_count.get();
        self.encrypt_count.set(current + 1);

        match self.behaviour() {
            MockBlockCipherBehaviour::FailAtNthEncrypt(n) if current + 1 == n => {
                Err(CipherError::EncryptionFailed)
            }
            _ => self.inner.encrypt_block(block),
        }
    }
}
