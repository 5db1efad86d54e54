// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Sentinel padding that fits a bit string of any length to a multiple of a width and is
//! removed again without knowing the original length.
//!
//! Padding is a single `1` bit followed by as many `0` bits as needed. It is added even when
//! the input is already aligned, so the last `1` bit of a padded string always marks where the
//! padding starts.

use crate::error::Malformation;
use crate::type_traits::Bits;

/// Appends the sentinel `1` bit and then `0` bits until the length of `bits` is a multiple of
/// `width`.
///
/// At least one and at most `width` bits are appended.
///
/// # Panics
///
/// Panics if `width` is zero.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
/// use feistel::pad;
///
/// let mut bits = bitvec![u8, Msb0; 1, 0, 1];
/// pad(&mut bits, 4);
/// assert_eq!(bits, bitvec![u8, Msb0; 1, 0, 1, 1]);
///
/// pad(&mut bits, 4);
/// assert_eq!(bits, bitvec![u8, Msb0; 1, 0, 1, 1, 1, 0, 0, 0]);
/// ```
pub fn pad(bits: &mut Bits, width: usize) {
    assert!(width > 0, "padding width must be non-zero");

    bits.push(true);
    let filler = (width - bits.len() % width) % width;
    bits.resize(bits.len() + filler, false);
}

/// Removes the padding [pad] appended for `width`: the trailing `0` bits and the `1` bit before
/// them.
///
/// Fails if `bits` holds no `1` bit, or if the padding found is longer than `pad` could have
/// made it.
pub fn unpad(bits: &mut Bits, width: usize) -> Result<(), Malformation> {
    let sentinel = bits
        .iter()
        .by_vals()
        .rev()
        .position(|bit| bit)
        .map(|from_end| bits.len() - 1 - from_end)
        .ok_or(Malformation::MissingSentinel)?;
    let padding = bits.len() - sentinel;
    if padding > width {
        return Err(Malformation::OversizedPadding { padding, width });
    }

    bits.truncate(sentinel);
    Ok(())
}
