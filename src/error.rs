// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Errors reported while configuring the network and while encrypting or decrypting text.
//!

/// The `CodebookError` enum represents the possible errors that can occur while building a
/// [Codebook](crate::Codebook).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodebookError {
    #[error("codebook has no entries")]
    Empty,
    #[error("code `{code}` of symbol {symbol:?} is not a non-empty string of '0' and '1'")]
    InvalidCode { symbol: char, code: String },
    #[error("code of symbol {symbol:?} is {found} bits wide, expected {expected}")]
    MismatchedWidth {
        symbol: char,
        expected: usize,
        found: usize,
    },
    #[error("code width `{0}` is not supported; the widest supported code is 64 bits")]
    WidthTooLarge(usize),
    #[error("symbol {0:?} appears more than once")]
    DuplicateSymbol(char),
    #[error("code `{code}` is shared by symbols {first:?} and {second:?}")]
    DuplicateCode {
        code: String,
        first: char,
        second: char,
    },
}

/// The `FeistelInitError` enum represents the possible errors that can occur during the
/// [Feistel](crate::Feistel) initialization.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FeistelInitError {
    #[error("invalid block size `{0}`; it must be even and non-zero")]
    InvalidBlockSize(usize),
    #[error("block size `{0}` is too large; the subblock word holds at most `{1}` bit blocks")]
    BlockSizeTooLarge(usize, usize),
    #[error("the number of rounds must be at least 1")]
    ZeroRounds,
    #[error("key schedule has `{0}` keys but `{1}` rounds were requested")]
    ShortKeySchedule(usize, usize),
    #[error("key `{0}` at index `{1}` has no negation and can't be used for decryption")]
    UnnegatableKey(i64, usize),
}

/// The `Malformation` enum describes why a bit string can't be what the network produced.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    #[error("bit length `{len}` is not a multiple of `{width}`")]
    Misaligned { len: usize, width: usize },
    #[error("bit pattern `{0}` has no codebook entry")]
    UnknownCode(String),
    #[error("no sentinel bit marks the start of the padding")]
    MissingSentinel,
    #[error("`{padding}` padding bits found, at most `{width}` are ever added")]
    OversizedPadding { padding: usize, width: usize },
    #[error("`{width}` bit subblocks don't fit into a `{max}` bit word")]
    SubblockTooWide { width: usize, max: usize },
}

/// The `FeistelError` enum represents the possible errors that can occur during the
/// encryption and decryption of text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FeistelError {
    #[error("symbol {0:?} is not in the codebook")]
    UnknownSymbol(char),
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(#[from] Malformation),
}
