// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Key length in 32-bit words (256-bit key).
pub const KEY_WORDS: usize = 8;

/// Counter length in 32-bit words (128-bit counter).
pub const COUNTER_WORDS: usize = 4;

/// Words produced by one cipher block.
pub const WORDS_PER_BLOCK: usize = 4;

/// Lookahead buffer length in 32-bit words (half a block).
pub(crate) const BUFFER_WORDS: usize = 2;

/// Persisted state length in words: `key[8] | counter[4] | rekey_counter[1] | buffer[2]`.
pub const STATE_WORDS: usize = KEY_WORDS + COUNTER_WORDS + 1 + BUFFER_WORDS;

/// Persisted state length in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 4;

/// A block call that pushes the rekey counter above this value rekeys.
///
/// 2^16 blocks of 16 bytes bound each key to 2^20 bytes of output.
pub const REKEY_THRESHOLD: u32 = 65_535;

/// First 28 bytes of the key produced by [`Fortuna::init`](crate::Fortuna::init).
///
/// The seed fills the remaining four bytes.
pub const DEFAULT_KEY_PAD: &[u8; 28] = b"This is a very random key(!)";

pub(crate) const KEY_OFFSET: usize = 0;
pub(crate) const COUNTER_OFFSET: usize = KEY_OFFSET + KEY_WORDS;
pub(crate) const REKEY_COUNTER_OFFSET: usize = COUNTER_OFFSET + COUNTER_WORDS;
pub(crate) const BUFFER_OFFSET: usize = REKEY_COUNTER_OFFSET + 1;
