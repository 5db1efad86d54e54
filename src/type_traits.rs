// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Traits for the unsigned words that carry subblocks through the rounds, and helpers for
//! moving fixed-width words in and out of bit strings.
//!

use bitvec::prelude::*;

/// An owned bit string, first bit first.
pub type Bits = BitVec<u8, Msb0>;

/// A borrowed bit string, first bit first.
pub type BitStr = BitSlice<u8, Msb0>;

/// A trait for the unsigned types that can hold one subblock.
pub trait Word:
    num_traits::PrimInt + num_traits::Unsigned + std::fmt::Debug + Send + Sync
{
    /// The number of bits in the type, the widest subblock it can hold.
    const BITS: u32;
}

macro_rules! impl_word {
    ($($t:ty)*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
            }
        )*
    };
}

impl_word!(u8 u16 u32 u64 u128);

/// Returns a word with the lowest `width` bits set.
pub fn low_mask<W: Word>(width: usize) -> W {
    if width >= W::BITS as usize {
        W::max_value()
    } else {
        (W::one() << width) - W::one()
    }
}

/// Rotates the lowest `width` bits of `value` left by `shift`, a negative `shift` rotates right.
///
/// Bits above `width` are cleared. Rotating by `-shift` undoes a rotation by `shift`.
pub fn rotate_left_within<W: Word>(value: W, shift: i64, width: usize) -> W {
    let value = value & low_mask(width);
    let amount = rotation_amount(shift, width);
    if amount == 0 {
        return value;
    }

    ((value << amount) | (value >> (width - amount))) & low_mask(width)
}

fn rotation_amount(shift: i64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    shift.rem_euclid(width as i64) as usize
}

/// Appends the lowest `width` bits of `value` to `bits`, most significant bit first.
pub fn push_word<W: Word>(bits: &mut Bits, value: W, width: usize) {
    for i in (0..width).rev() {
        bits.push(((value >> i) & W::one()) == W::one());
    }
}

/// Reads `bits` as an unsigned number, most significant bit first.
///
/// The caller keeps `bits.len()` within `W::BITS`, longer inputs lose their leading bits.
pub fn read_word<W: Word>(bits: &BitStr) -> W {
    bits.iter().by_vals().fold(W::zero(), |acc, bit| {
        (acc << 1) | if bit { W::one() } else { W::zero() }
    })
}
