// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! This module cuts a block aligned bit string into blocks of two subblock words, and writes
//! processed blocks back into a bit string.

use crate::error::{FeistelError, Malformation};
use crate::type_traits::*;

/// One block, as its left and right halves read as unsigned numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<W> {
    pub left: W,
    pub right: W,
}

/// The blocks of a bit string in order, together with the width of every subblock.
///
/// The width is kept so that the subblock values can be written back without losing their
/// leading zero bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocks<W> {
    pub subblock_width: usize,
    pub blocks: Vec<Block<W>>,
}

/// Splits `bits` into consecutive `block_size` wide blocks and each block into two halves.
///
/// `bits` must already be a whole number of blocks, which [pad](crate::pad) guarantees, and
/// each half of a block must fit into `W`.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
/// use feistel::{split, Block};
///
/// let bits = bitvec![u8, Msb0; 0, 1, 1, 1, 1, 0, 0, 0];
/// let blocks = split::<u8>(&bits, 4).unwrap();
///
/// assert_eq!(blocks.subblock_width, 2);
/// assert_eq!(blocks.blocks, [Block { left: 1, right: 3 }, Block { left: 2, right: 0 }]);
/// ```
pub fn split<W: Word>(bits: &BitStr, block_size: usize) -> Result<Blocks<W>, FeistelError> {
    if block_size == 0 || bits.len() % block_size != 0 {
        return Err(Malformation::Misaligned {
            len: bits.len(),
            width: block_size,
        }
        .into());
    }

    let subblock_width = block_size / 2;
    if subblock_width > W::BITS as usize {
        return Err(Malformation::SubblockTooWide {
            width: subblock_width,
            max: W::BITS as usize,
        }
        .into());
    }

    let blocks = bits
        .chunks_exact(block_size)
        .map(|chunk| {
            let (left, right) = chunk.split_at(subblock_width);
            Block {
                left: read_word(left),
                right: read_word(right),
            }
        })
        .collect();

    Ok(Blocks {
        subblock_width,
        blocks,
    })
}

/// Writes every block back as its left and then its right subblock, each zero padded to the
/// subblock width.
pub fn reassemble<W: Word>(blocks: &Blocks<W>) -> Bits {
    let width = blocks.subblock_width;
    let mut bits = Bits::with_capacity(blocks.blocks.len() * width * 2);
    for block in &blocks.blocks {
        push_word(&mut bits, block.left, width);
        push_word(&mut bits, block.right, width);
    }

    bits
}
