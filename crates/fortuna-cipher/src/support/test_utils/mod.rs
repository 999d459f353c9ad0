// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking block ciphers.
//!
//! Provides a mock backend with configurable failures.

mod mock_block_cipher;

pub use mock_block_cipher::{MockBlockCipher, MockBlockCipherBehaviour};
