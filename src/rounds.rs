// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The Feistel round structure: the pluggable round function, the round key schedule and the
//! forward and inverse rounds applied to a single block.
//!

use crate::blocks::Block;
use crate::error::FeistelInitError;
use crate::type_traits::*;

/// The per-round transform of a subblock.
///
/// `apply(value, key, width)` receives a subblock `value` below `2^width` and the round `key`.
///
/// The network can only be decrypted if the function is deterministic, keeps its output below
/// `2^width`, and is undone by the negated key:
/// `apply(apply(x, k, width), -k, width) == x` for every `x` below `2^width`. The network does
/// not check this; outputs are only masked to `width` bits.
///
/// Any `Fn(W, i64, usize) -> W` closure is a round function.
pub trait RoundFunction<W>: Send + Sync {
    fn apply(&self, value: W, key: i64, width: usize) -> W;
}

impl<W, F> RoundFunction<W> for F
where
    F: Fn(W, i64, usize) -> W + Send + Sync,
{
    fn apply(&self, value: W, key: i64, width: usize) -> W {
        self(value, key, width)
    }
}

/// The ordered round keys and the number of rounds they drive.
///
/// Round `j` encrypts with `keys[j]` and decrypts with `-keys[rounds - 1 - j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchedule {
    keys: Box<[i64]>,
    rounds: usize,
}

impl KeySchedule {
    /// Creates a schedule running `rounds` rounds over the first `rounds` of `keys`.
    ///
    /// Fails if `rounds` is zero, if there are fewer keys than rounds, or if a key in use is
    /// `i64::MIN`, which has no negation.
    pub fn new(keys: &[i64], rounds: usize) -> Result<KeySchedule, FeistelInitError> {
        if rounds == 0 {
            return Err(FeistelInitError::ZeroRounds);
        }
        if keys.len() < rounds {
            return Err(FeistelInitError::ShortKeySchedule(keys.len(), rounds));
        }
        if let Some(index) = keys[..rounds].iter().position(|key| *key == i64::MIN) {
            return Err(FeistelInitError::UnnegatableKey(keys[index], index));
        }

        Ok(KeySchedule {
            keys: keys.into(),
            rounds,
        })
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The key of encryption round `round`.
    pub fn encryption_key(&self, round: usize) -> i64 {
        self.keys[round]
    }

    /// The key of decryption round `round`: the encryption keys in reverse order, negated.
    pub fn decryption_key(&self, round: usize) -> i64 {
        -self.keys[self.rounds - 1 - round]
    }
}

/// Runs the encryption rounds over `block`, whose subblocks are `width` bits wide.
///
/// Every round replaces `(L, R)` with `(R, f(L, key) ^ R)`.
pub fn encrypt_block<W, F>(f: &F, schedule: &KeySchedule, width: usize, block: &mut Block<W>)
where
    W: Word,
    F: RoundFunction<W> + ?Sized,
{
    let mask = low_mask::<W>(width);
    for round in 0..schedule.rounds() {
        let mixed = f.apply(block.left, schedule.encryption_key(round), width) & mask;
        (block.left, block.right) = (block.right, mixed ^ block.right);
    }
}

/// Runs the decryption rounds over `block`, undoing [encrypt_block].
///
/// Every round replaces `(L, R)` with `(f(L ^ R, -key), L)`, taking the keys last to first.
pub fn decrypt_block<W, F>(f: &F, schedule: &KeySchedule, width: usize, block: &mut Block<W>)
where
    W: Word,
    F: RoundFunction<W> + ?Sized,
{
    let mask = low_mask::<W>(width);
    for round in 0..schedule.rounds() {
        let key = schedule.decryption_key(round);
        let restored = f.apply(block.left ^ block.right, key, width) & mask;
        (block.left, block.right) = (restored, block.left);
    }
}
