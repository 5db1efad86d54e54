// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! This library provides a configurable Feistel network that encrypts and decrypts text.
//!
//! A Feistel network splits every block into a left and a right half and, over a number of
//! rounds, replaces `(L, R)` with `(R, f(L, key) ^ R)`. Decryption runs the rounds in reverse
//! order with negated keys. The round function `f`, the round keys, the number of rounds and
//! the block size are all chosen by the caller.
//!
//! Text is turned into bits by a [Codebook], a bijective table of fixed-width codes. The bits
//! are padded to whole blocks with a sentinel `1` bit followed by `0` bits, encrypted block by
//! block, padded to whole codes and decoded back into text over the same alphabet.
//!
//! The network is a structural cipher framework; it offers no cryptographic strength.
//!
//! ```
//! use feistel::samples::{CyclicShift, BAUDOT};
//! use feistel::{Codebook, Feistel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let keys: Vec<i64> = (1..=32).collect();
//! let feistel = Feistel::<u32, _>::new(&keys, 64, CyclicShift, 32, Codebook::new(BAUDOT)?)?;
//!
//! let message = "I WORK HARDER THAN GOD. 'KEEPING THE FAITH'";
//! let ciphertext = feistel.encrypt(message)?;
//! assert_eq!(feistel.decrypt(&ciphertext)?, message);
//! # Ok(())
//! # }
//! ```
//!

mod algorithm;
mod blocks;
mod codebook;
mod error;
mod padding;
mod rounds;
pub mod samples;
mod type_traits;

pub use crate::algorithm::*;
pub use crate::blocks::{reassemble, split, Block, Blocks};
pub use crate::codebook::{Codebook, MAX_CODING_BITS};
pub use crate::error::*;
pub use crate::padding::{pad, unpad};
pub use crate::rounds::*;
pub use crate::type_traits::{
    low_mask, push_word, read_word, rotate_left_within, BitStr, Bits, Word,
};
