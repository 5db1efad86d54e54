// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Reference configurations: a cyclic shift round function and the 5-bit telegraphic alphabet.
//!

use crate::rounds::RoundFunction;
use crate::type_traits::*;

/// A round function that rotates the subblock left by the key, modulo the subblock width.
///
/// Negative keys rotate right, so the negated key undoes the rotation.
///
/// # Examples
///
/// ```
/// use feistel::samples::CyclicShift;
/// use feistel::RoundFunction;
///
/// assert_eq!(CyclicShift.apply(0b10011u8, 1, 5), 0b00111);
/// assert_eq!(CyclicShift.apply(0b00111u8, -1, 5), 0b10011);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclicShift;

impl<W: Word> RoundFunction<W> for CyclicShift {
    fn apply(&self, value: W, key: i64, width: usize) -> W {
        rotate_left_within(value, key, width)
    }
}

/// The telegraphic (Baudot) alphabet: upper case letters, the digits `1` and `2`, space,
/// apostrophe, comma and period, each as a 5-bit code. Every 5-bit pattern has a symbol.
pub const BAUDOT: [(char, &str); 32] = [
    ('1', "00000"),
    ('E', "00001"),
    ('\'', "00010"),
    ('A', "00011"),
    (' ', "00100"),
    ('S', "00101"),
    ('I', "00110"),
    ('U', "00111"),
    (',', "01000"),
    ('D', "01001"),
    ('R', "01010"),
    ('J', "01011"),
    ('N', "01100"),
    ('F', "01101"),
    ('C', "01110"),
    ('K', "01111"),
    ('T', "10000"),
    ('Z', "10001"),
    ('L', "10010"),
    ('W', "10011"),
    ('H', "10100"),
    ('Y', "10101"),
    ('P', "10110"),
    ('Q', "10111"),
    ('O', "11000"),
    ('B', "11001"),
    ('G', "11010"),
    ('.', "11011"),
    ('M', "11100"),
    ('X', "11101"),
    ('V', "11110"),
    ('2', "11111"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codebook::Codebook;

    #[test]
    fn baudot_is_complete() {
        let codebook = Codebook::new(BAUDOT).unwrap();
        assert_eq!(codebook.coding_bits(), 5);
        assert_eq!(codebook.len(), 32);
        assert!(codebook.is_complete());
    }

    #[test]
    fn cyclic_shift_key_wraps_around_width() {
        let value = 0b1100_0000_0000_0001u16;
        assert_eq!(
            RoundFunction::<u16>::apply(&CyclicShift, value, 17, 16),
            RoundFunction::<u16>::apply(&CyclicShift, value, 1, 16)
        );
        assert_eq!(
            RoundFunction::<u16>::apply(&CyclicShift, value, 1, 16),
            0b1000_0000_0000_0011
        );
    }

    #[test]
    fn cyclic_shift_undone_by_negated_key() {
        for value in 0..1024u32 {
            let shifted = CyclicShift.apply(value, 7, 10);
            assert!(shifted < 1024);
            assert_eq!(CyclicShift.apply(shifted, -7, 10), value);
        }
    }
}
