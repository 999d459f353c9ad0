// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reference outputs computed with an independent AES-256 implementation of
//! the same counter/rekey schedule.

use crate::generator::Fortuna;
use crate::tests::utils::{SEED, words_one_block_before_rekey};

fn generator(seed: u32) -> Fortuna {
    Fortuna::from_seed(seed).expect("Failed to Fortuna::from_seed(..)")
}

#[test]
fn test_seed_42_first_blocks() {
    let mut fortuna = generator(SEED);

    let expected = [
        [0xB7D4_1B6D, 0x349A_96C4, 0x03DE_7F2B, 0x3C8F_D57E],
        [0x2209_BD35, 0x3A9D_B864, 0xDB96_F51B, 0x41E7_FA17],
        [0xC060_B635, 0x658D_3712, 0xD4F6_358E, 0xAEC1_B28C],
    ];

    for (i, block) in expected.iter().enumerate() {
        assert_eq!(
            &fortuna
                .generate()
                .unwrap_or_else(|_| panic!("Failed to generate() (#{i})")),
            block
        );
    }
}

#[test]
fn test_seed_0_first_blocks() {
    let mut fortuna = generator(0);

    assert_eq!(
        fortuna.generate().expect("Failed to generate() (#0)"),
        [0x1EBC_2C17, 0xEF2B_1C7E, 0x819B_9D2F, 0xFD7A_9140]
    );
    assert_eq!(
        fortuna.generate().expect("Failed to generate() (#1)"),
        [0x5C1E_D05D, 0xF6B9_1ACF, 0x8F69_7FC4, 0x3A04_523E]
    );
}

#[test]
fn test_seed_deadbeef_first_block() {
    let mut fortuna = generator(0xDEAD_BEEF);

    assert_eq!(
        fortuna.generate().expect("Failed to generate()"),
        [0x4661_3714, 0x5365_BC2B, 0x5AEB_543F, 0x35DE_E691]
    );
}

#[test]
fn test_seed_42_first_block_bytes() {
    let mut fortuna = generator(SEED);

    assert_eq!(
        fortuna.generate_bytes().expect("Failed to generate_bytes()"),
        [
            0x6D, 0x1B, 0xD4, 0xB7, 0xC4, 0x96, 0x9A, 0x34, 0x2B, 0x7F, 0xDE, 0x03, 0x7E, 0xD5,
            0x8F, 0x3C
        ]
    );
}

#[test]
fn test_seed_42_first_uniforms() {
    let mut fortuna = generator(SEED);

    let expected: [f64; 4] = [
        0.718080248200233,
        0.015113781032078782,
        0.1329611068037176,
        0.8577721780434291,
    ];

    for (i, value) in expected.iter().enumerate() {
        let actual = fortuna
            .next_uniform()
            .unwrap_or_else(|_| panic!("Failed to next_uniform() (#{i})"));
        assert_eq!(actual.to_bits(), value.to_bits());
    }
}

#[test]
fn test_seed_42_forced_rekey() {
    let mut fortuna = Fortuna::new();
    fortuna
        .restore_words(&words_one_block_before_rekey())
        .expect("Failed to restore_words(..)");

    // Output is still taken under the old key.
    assert_eq!(
        fortuna.generate().expect("Failed to generate() (#0)"),
        [0xB7D4_1B6D, 0x349A_96C4, 0x03DE_7F2B, 0x3C8F_D57E]
    );

    // New key is the old key's output at counter positions 2 and 3.
    let words = fortuna.snapshot_words();
    assert_eq!(
        words[..8],
        [
            0x2209_BD35,
            0x3A9D_B864,
            0xDB96_F51B,
            0x41E7_FA17,
            0xC060_B635,
            0x658D_3712,
            0xD4F6_358E,
            0xAEC1_B28C
        ]
    );
    assert_eq!(words[8..12], [0, 0, 0, 4]);
    assert_eq!(words[12], 0);

    assert_eq!(
        fortuna.generate().expect("Failed to generate() (#1)"),
        [0x48C6_2402, 0x1A18_1008, 0x72FB_1D57, 0x2B4D_73B1]
    );
}

#[test]
fn test_seed_42_natural_rekey_at_block_65536() {
    let mut fortuna = generator(SEED);

    for i in 0..65_535 {
        fortuna
            .generate()
            .unwrap_or_else(|_| panic!("Failed to generate() (#{i})"));
    }
    assert_eq!(fortuna.state().rekey_counter(), 65_535);
    assert_eq!(fortuna.state().counter().words(), [0, 0, 0, 65_536]);

    assert_eq!(
        fortuna.generate().expect("Failed to generate() (#65535)"),
        [0x53AB_CB56, 0xA409_1F92, 0x76A8_64EB, 0x3DEC_3521]
    );
    assert_eq!(fortuna.state().rekey_counter(), 0);
    assert_eq!(fortuna.state().counter().words(), [0, 0, 0, 65_539]);
    assert_eq!(
        fortuna.snapshot_words()[..8],
        [
            0x4F80_A43E,
            0xA2CC_A118,
            0x5B23_D493,
            0x6B3A_A742,
            0xC533_044A,
            0xD76B_17EE,
            0xE233_0C39,
            0x1562_7FBF
        ]
    );

    assert_eq!(
        fortuna.generate().expect("Failed to generate() (#65536)"),
        [0xF628_0EC4, 0x71C2_8F15, 0x4618_CDBC, 0x5F14_2012]
    );
    assert_eq!(fortuna.state().counter().words(), [0, 0, 0, 65_540]);
}
