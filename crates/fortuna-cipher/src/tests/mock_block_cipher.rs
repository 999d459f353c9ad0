// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::aes256::Aes256Cipher;
use crate::error::CipherError;
use crate::support::test_utils::{MockBlockCipher, MockBlockCipherBehaviour};
use crate::traits::BlockCipher;

#[test]
fn test_mock_delegates_to_aes() {
    let mut mock = MockBlockCipher::new(MockBlockCipherBehaviour::None);
    mock.set_key(&[3u8; 32]).expect("Failed to set_key(..)");

    let real = Aes256Cipher::new(&[3u8; 32]).expect("Failed to Aes256Cipher::new(..)");

    assert_eq!(
        mock.encrypt_block(&[5u8; 16]).expect("Failed to encrypt_block(..) (mock)"),
        real.encrypt_block(&[5u8; 16]).expect("Failed to encrypt_block(..) (real)")
    );
    assert_eq!(mock.set_key_count(), 1);
    assert_eq!(mock.encrypt_count(), 1);
}

#[test]
fn test_mock_fails_at_nth_set_key() {
    let mut mock = MockBlockCipher::new(MockBlockCipherBehaviour::FailAtNthSetKey(2));

    assert!(mock.set_key(&[0u8; 32]).is_ok());
    assert!(matches!(
        mock.set_key(&[0u8; 32]),
        Err(CipherError::InvalidKeySize)
    ));
    assert!(mock.set_key(&[0u8; 32]).is_ok());
    assert_eq!(mock.set_key_count(), 3);
}

#[test]
fn test_mock_fails_at_nth_encrypt() {
    let mut mock = MockBlockCipher::new(MockBlockCipherBehaviour::FailAtNthEncrypt(3));
    mock.set_key(&[0u8; 32]).expect("Failed to set_key(..)");

    assert!(mock.encrypt_block(&[0u8; 16]).is_ok());
    assert!(mock.encrypt_block(&[0u8; 16]).is_ok());
    assert!(matches!(
        mock.encrypt_block(&[0u8; 16]),
        Err(CipherError::EncryptionFailed)
    ));
    assert!(mock.encrypt_block(&[0u8; 16]).is_ok());
}

#[test]
fn test_mock_change_behaviour_and_reset_count() {
    let mut mock = MockBlockCipher::default();
    mock.set_key(&[0u8; 32]).expect("Failed to set_key(..)");
    mock.encrypt_block(&[0u8; 16])
        .expect("Failed to encrypt_block(..)");

    mock.reset_count();
    assert_eq!(mock.set_key_count(), 0);
    assert_eq!(mock.encrypt_count(), 0);

    mock.change_behaviour(MockBlockCipherBehaviour::FailAtNthEncrypt(1));
    assert!(mock.encrypt_block(&[0u8; 16]).is_err());
}
