// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The Feistel network over text: codebook encoding, padding, blocks and rounds tied together.
//!
use crate::blocks::*;
use crate::codebook::Codebook;
use crate::error::{FeistelError, FeistelInitError};
use crate::padding::*;
use crate::rounds::*;
use crate::type_traits::*;
use std::marker::PhantomData;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The Feistel struct represents a configured Feistel network over the alphabet of a codebook.
///
/// Subblocks are carried in words of type `W`, so a network with block size `b` needs a `W`
/// of at least `b / 2` bits. The round function `F` and the key schedule drive the rounds.
pub struct Feistel<W, F> {
    schedule: KeySchedule,
    block_size: usize,
    round_function: F,
    codebook: Codebook,
    _word: PhantomData<W>,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl<W, F> Feistel<W, F>
where
    W: Word,
    F: RoundFunction<W>,
{
    /// Creates a new Feistel network.
    ///
    /// The `keys` parameter is the round key schedule, of which the first `rounds` keys are
    /// used. The `block_size` is the number of bits in a block, which must be even and split
    /// into two subblocks that fit into `W`. The `round_function` must be undone by the negated
    /// key, see [RoundFunction].
    ///
    /// # Examples
    ///
    /// ```
    /// use feistel::samples::{CyclicShift, BAUDOT};
    /// use feistel::{Codebook, Feistel};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let keys: Vec<i64> = (1..=32).collect();
    /// let codebook = Codebook::new(BAUDOT)?;
    /// let feistel = Feistel::<u32, _>::new(&keys, 64, CyclicShift, 32, codebook)?;
    ///
    /// let ciphertext = feistel.encrypt("HELLO, WORLD.")?;
    /// assert_ne!(ciphertext, "HELLO, WORLD.");
    /// assert_eq!(feistel.decrypt(&ciphertext)?, "HELLO, WORLD.");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        keys: &[i64],
        block_size: usize,
        round_function: F,
        rounds: usize,
        codebook: Codebook,
    ) -> Result<Feistel<W, F>, FeistelInitError> {
        if block_size == 0 || block_size % 2 != 0 {
            return Err(FeistelInitError::InvalidBlockSize(block_size));
        }
        let max_block_size = 2 * W::BITS as usize;
        if block_size > max_block_size {
            return Err(FeistelInitError::BlockSizeTooLarge(block_size, max_block_size));
        }

        let schedule = KeySchedule::new(keys, rounds)?;

        if !codebook.is_complete() {
            log::warn!(
                "codebook with {} symbols does not cover all {}-bit patterns; encryption may fail",
                codebook.len(),
                codebook.coding_bits()
            );
        }
        log::debug!(
            "feistel network: block_size={block_size}, rounds={rounds}, coding_bits={}",
            codebook.coding_bits()
        );

        Ok(Feistel {
            schedule,
            block_size,
            round_function,
            codebook,
            _word: PhantomData,
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    pub fn codebook(&self) -> &Codebook {
        &self.codebook
    }

    /// Encrypts `text`, returning the ciphertext over the same alphabet.
    ///
    /// The text is encoded, padded to whole blocks, run through the rounds block by block,
    /// then padded to whole codes and decoded. Fails with [FeistelError::UnknownSymbol] for a
    /// symbol outside the codebook.
    pub fn encrypt(&self, text: &str) -> Result<String, FeistelError> {
        let mut bits = self.codebook.encode(text)?;
        pad(&mut bits, self.block_size);

        let mut blocks = split::<W>(&bits, self.block_size)?;
        self.transform(&mut blocks, Direction::Encrypt);

        let mut bits = reassemble(&blocks);
        pad(&mut bits, self.codebook.coding_bits());

        log::debug!(
            "encrypted {} symbols in {} blocks",
            text.chars().count(),
            blocks.blocks.len()
        );
        self.codebook.decode(&bits)
    }

    /// Decrypts `text` produced by [Feistel::encrypt] with the same configuration.
    ///
    /// Fails with [FeistelError::MalformedCiphertext] if the padding or the block alignment of
    /// `text` can't have come from encryption.
    pub fn decrypt(&self, text: &str) -> Result<String, FeistelError> {
        let mut bits = self.codebook.encode(text)?;
        unpad(&mut bits, self.codebook.coding_bits())?;

        let mut blocks = split::<W>(&bits, self.block_size)?;
        self.transform(&mut blocks, Direction::Decrypt);

        let mut bits = reassemble(&blocks);
        unpad(&mut bits, self.block_size)?;

        log::debug!("decrypted {} blocks", blocks.blocks.len());
        self.codebook.decode(&bits)
    }

    fn transform(&self, blocks: &mut Blocks<W>, direction: Direction) {
        let width = blocks.subblock_width;
        let apply = |block: &mut Block<W>| match direction {
            Direction::Encrypt => {
                encrypt_block(&self.round_function, &self.schedule, width, block)
            }
            Direction::Decrypt => {
                decrypt_block(&self.round_function, &self.schedule, width, block)
            }
        };

        log::trace!(
            "{direction:?} {} blocks of {width}-bit halves",
            blocks.blocks.len()
        );

        #[cfg(feature = "rayon")]
        blocks.blocks.par_iter_mut().for_each(apply);
        #[cfg(not(feature = "rayon"))]
        blocks.blocks.iter_mut().for_each(apply);
    }
}

/// The `FeistelAlgo` trait provides methods for encrypting and decrypting text with a
/// Feistel network. This trait is useful when the subblock word type is chosen at runtime,
/// see [new_feistel_dyn].
pub trait FeistelAlgo {
    /// Encrypts `text`, see [Feistel::encrypt].
    fn encrypt(&self, text: &str) -> Result<String, FeistelError>;
    /// Decrypts `text`, see [Feistel::decrypt].
    fn decrypt(&self, text: &str) -> Result<String, FeistelError>;
}

impl<W, F> FeistelAlgo for Feistel<W, F>
where
    W: Word,
    F: RoundFunction<W>,
{
    fn encrypt(&self, text: &str) -> Result<String, FeistelError> {
        Feistel::encrypt(self, text)
    }

    fn decrypt(&self, text: &str) -> Result<String, FeistelError> {
        Feistel::decrypt(self, text)
    }
}

/// Constructs a new [Feistel] network whose subblock word is the narrowest unsigned type that
/// holds `block_size / 2` bits.
///
/// # Arguments
///
/// * keys - The round key schedule.
/// * block_size - The number of bits in a block, even and at most 256.
/// * round_function - A round function usable with every word type.
/// * rounds - The number of rounds.
/// * codebook - The symbol encoding.
///
/// # Returns
///
/// A Result containing a boxed dyn [FeistelAlgo] instance on success, or a [FeistelInitError]
/// on failure.
///
/// # Examples
///
/// ```
/// use feistel::samples::{CyclicShift, BAUDOT};
/// use feistel::{new_feistel_dyn, Codebook, FeistelAlgo};
///
/// let keys = [3, 1, 4, 1, 5, 9, 2, 6];
/// let algo = new_feistel_dyn(&keys, 20, CyclicShift, 8, Codebook::new(BAUDOT).unwrap()).unwrap();
/// let ct = algo.encrypt("SIGNAL").unwrap();
/// assert_eq!(algo.decrypt(&ct).unwrap(), "SIGNAL");
/// ```
pub fn new_feistel_dyn<F>(
    keys: &[i64],
    block_size: usize,
    round_function: F,
    rounds: usize,
    codebook: Codebook,
) -> Result<Box<dyn FeistelAlgo>, FeistelInitError>
where
    F: RoundFunction<u8>
        + RoundFunction<u16>
        + RoundFunction<u32>
        + RoundFunction<u64>
        + RoundFunction<u128>
        + 'static,
{
    const W8: usize = u8::BITS as usize;
    const W16: usize = u16::BITS as usize;
    const W32: usize = u32::BITS as usize;
    const W64: usize = u64::BITS as usize;
    match block_size / 2 {
        half if half <= W8 => Ok(Box::new(Feistel::<u8, F>::new(
            keys,
            block_size,
            round_function,
            rounds,
            codebook,
        )?)),
        half if half <= W16 => Ok(Box::new(Feistel::<u16, F>::new(
            keys,
            block_size,
            round_function,
            rounds,
            codebook,
        )?)),
        half if half <= W32 => Ok(Box::new(Feistel::<u32, F>::new(
            keys,
            block_size,
            round_function,
            rounds,
            codebook,
        )?)),
        half if half <= W64 => Ok(Box::new(Feistel::<u64, F>::new(
            keys,
            block_size,
            round_function,
            rounds,
            codebook,
        )?)),
        _ => Ok(Box::new(Feistel::<u128, F>::new(
            keys,
            block_size,
            round_function,
            rounds,
            codebook,
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Malformation;
    use crate::samples::{CyclicShift, BAUDOT};

    fn quaternary() -> Codebook {
        Codebook::new([('A', "00"), ('B', "01"), ('C', "10"), ('D', "11")]).unwrap()
    }

    fn baudot() -> Codebook {
        Codebook::new(BAUDOT).unwrap()
    }

    fn identity(value: u8, _key: i64, _width: usize) -> u8 {
        value
    }

    #[test]
    fn invalid_block_size_odd() {
        let res = Feistel::<u8, _>::new(&[1], 5, identity, 1, quaternary());
        assert!(matches!(
            res,
            Err(FeistelInitError::InvalidBlockSize(error_block_size))
            if error_block_size == 5
        ));
    }

    #[test]
    fn invalid_block_size_zero() {
        let res = Feistel::<u8, _>::new(&[1], 0, identity, 1, quaternary());
        assert!(matches!(res, Err(FeistelInitError::InvalidBlockSize(0))));
    }

    #[test]
    fn block_size_too_large_for_word() {
        let res = Feistel::<u8, _>::new(&[1], 18, identity, 1, quaternary());
        assert!(matches!(
            res,
            Err(FeistelInitError::BlockSizeTooLarge(18, 16))
        ));
    }

    #[test]
    fn short_key_schedule() {
        let res = Feistel::<u8, _>::new(&[1, 2], 4, identity, 3, quaternary());
        assert!(matches!(
            res,
            Err(FeistelInitError::ShortKeySchedule(2, 3))
        ));
    }

    #[test]
    fn zero_rounds() {
        let res = Feistel::<u8, _>::new(&[1, 2], 4, identity, 0, quaternary());
        assert!(matches!(res, Err(FeistelInitError::ZeroRounds)));
    }

    #[test]
    fn identity_round_trip_abcd() {
        let feistel = Feistel::<u8, _>::new(&[1, 2], 4, identity, 2, quaternary()).unwrap();
        let ct = feistel.encrypt("ABCD").unwrap();
        assert_eq!(feistel.decrypt(&ct).unwrap(), "ABCD");
    }

    #[test]
    fn encrypt_abcd_by_hand() {
        // ABCD = 00 01 10 11, padded to 0001 1011 1000.
        // With f = identity every round maps (L, R) to (R, L ^ R), so two rounds give
        // (L ^ R, L), then 0001 1011 1000 turns into 0100 0110 1010 plus the sentinel 10.
        let feistel = Feistel::<u8, _>::new(&[1, 2], 4, identity, 2, quaternary()).unwrap();
        assert_eq!(feistel.encrypt("ABCD").unwrap(), "BABCCCC");
    }

    #[test]
    fn unknown_symbol() {
        let feistel = Feistel::<u8, _>::new(&[1, 2], 4, identity, 2, quaternary()).unwrap();
        assert_eq!(
            feistel.encrypt("ABX"),
            Err(FeistelError::UnknownSymbol('X'))
        );
        assert_eq!(
            feistel.decrypt("ABX"),
            Err(FeistelError::UnknownSymbol('X'))
        );
    }

    #[test]
    fn decrypt_without_sentinel() {
        let feistel = Feistel::<u8, _>::new(&[1, 2], 4, identity, 2, quaternary()).unwrap();
        assert_eq!(
            feistel.decrypt("AAAA"),
            Err(FeistelError::MalformedCiphertext(
                Malformation::MissingSentinel
            ))
        );
    }

    #[test]
    fn decrypt_all_zero_baudot() {
        // '1' is 00000, and zero subblocks stay zero under the identity rounds
        let feistel = Feistel::<u8, _>::new(&[3, 4], 10, identity, 2, baudot()).unwrap();
        assert_eq!(
            feistel.decrypt("1111111111"),
            Err(FeistelError::MalformedCiphertext(
                Malformation::MissingSentinel
            ))
        );
    }

    #[test]
    fn decrypt_misaligned_blocks() {
        let feistel = Feistel::<u8, _>::new(&[1, 2], 4, identity, 2, quaternary()).unwrap();
        // 00 00 01 10 -> sentinel at bit 6, leaves six bits for 4-bit blocks
        assert_eq!(
            feistel.decrypt("AABC"),
            Err(FeistelError::MalformedCiphertext(Malformation::Misaligned {
                len: 6,
                width: 4
            }))
        );
    }

    #[test]
    fn empty_message() {
        let feistel = Feistel::<u32, _>::new(&[7; 4], 64, CyclicShift, 4, baudot()).unwrap();
        let ct = feistel.encrypt("").unwrap();
        assert!(!ct.is_empty());
        assert_eq!(feistel.decrypt(&ct).unwrap(), "");
    }

    #[test]
    fn incomplete_codebook_may_fail_to_decode() {
        let codebook = Codebook::new([('A', "00"), ('B', "01")]).unwrap();
        let feistel = Feistel::<u8, _>::new(&[1, 2], 4, identity, 2, codebook).unwrap();
        // the ciphertext bits 0100 1010 10 hold the pattern 10, which has no symbol
        assert!(matches!(
            feistel.encrypt("AB"),
            Err(FeistelError::MalformedCiphertext(Malformation::UnknownCode(_)))
        ));
    }

    #[test]
    fn accessors() {
        let feistel = Feistel::<u64, _>::new(&[1, 2, 3], 128, CyclicShift, 2, baudot()).unwrap();
        assert_eq!(feistel.block_size(), 128);
        assert_eq!(feistel.rounds(), 2);
        assert_eq!(feistel.codebook().coding_bits(), 5);
    }

    #[test]
    fn dyn_invalid_block_size() {
        let res = new_feistel_dyn(&[1], 7, CyclicShift, 1, baudot());
        assert!(matches!(res, Err(FeistelInitError::InvalidBlockSize(7))));
    }

    #[test]
    fn dyn_block_size_too_large() {
        let res = new_feistel_dyn(&[1], 258, CyclicShift, 1, baudot());
        assert!(matches!(
            res,
            Err(FeistelInitError::BlockSizeTooLarge(258, 256))
        ));
    }

    #[test]
    fn dyn_widest_block() {
        let keys: Vec<i64> = (0..12).map(|k| k * 37 - 100).collect();
        let algo = new_feistel_dyn(&keys, 256, CyclicShift, 12, baudot()).unwrap();
        let ct = algo.encrypt("THE QUICK BROWN FOX").unwrap();
        assert_eq!(algo.decrypt(&ct).unwrap(), "THE QUICK BROWN FOX");
    }
}
