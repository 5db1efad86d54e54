// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The bijective fixed-width mapping between text symbols and bit patterns.
//!

use std::collections::HashMap;

use crate::error::{CodebookError, FeistelError, Malformation};
use crate::type_traits::*;

/// The widest code a [Codebook] accepts.
pub const MAX_CODING_BITS: usize = 64;

/// A bijective mapping between symbols and bit patterns of one fixed width.
///
/// Text is turned into bits by concatenating the codes of its symbols, and bits are turned back
/// into text by cutting them into `coding_bits` wide chunks and looking each one up.
///
/// # Examples
///
/// ```
/// use feistel::{Codebook, CodebookError};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let codebook = Codebook::new([('A', "00"), ('B', "01"), ('C', "10"), ('D', "11")])?;
/// assert_eq!(codebook.coding_bits(), 2);
///
/// let bits = codebook.encode("CAB")?;
/// assert_eq!(bits.len(), 6);
/// assert_eq!(codebook.decode(&bits)?, "CAB");
///
/// let collision = Codebook::new([('A', "00"), ('B', "00")]);
/// assert!(matches!(collision, Err(CodebookError::DuplicateCode { .. })));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Codebook {
    codes: HashMap<char, u64>,
    symbols: HashMap<u64, char>,
    coding_bits: usize,
}

impl Codebook {
    /// Builds a codebook from `(symbol, code)` pairs, where every code is a string of '0' and
    /// '1' characters of the same length.
    ///
    /// Fails if the table is empty, if a code is not a bit pattern, if the widths differ or
    /// exceed [MAX_CODING_BITS], or if a symbol or a code appears twice.
    pub fn new<I, S>(entries: I) -> Result<Codebook, CodebookError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mut codes = HashMap::new();
        let mut symbols = HashMap::new();
        let mut coding_bits = None;

        for (symbol, code) in entries {
            let code = code.as_ref();
            let invalid_code = || CodebookError::InvalidCode {
                symbol,
                code: code.to_owned(),
            };

            if code.is_empty() || !code.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(invalid_code());
            }

            let expected = *coding_bits.get_or_insert(code.len());
            if code.len() != expected {
                return Err(CodebookError::MismatchedWidth {
                    symbol,
                    expected,
                    found: code.len(),
                });
            }
            if expected > MAX_CODING_BITS {
                return Err(CodebookError::WidthTooLarge(expected));
            }

            let value = u64::from_str_radix(code, 2).map_err(|_| invalid_code())?;
            if codes.contains_key(&symbol) {
                return Err(CodebookError::DuplicateSymbol(symbol));
            }
            if let Some(&first) = symbols.get(&value) {
                return Err(CodebookError::DuplicateCode {
                    code: code.to_owned(),
                    first,
                    second: symbol,
                });
            }

            codes.insert(symbol, value);
            symbols.insert(value, symbol);
        }

        let coding_bits = coding_bits.ok_or(CodebookError::Empty)?;

        Ok(Codebook {
            codes,
            symbols,
            coding_bits,
        })
    }

    /// The width in bits of every code.
    pub fn coding_bits(&self) -> usize {
        self.coding_bits
    }

    /// The number of symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// A built codebook always holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns `true` if `symbol` has a code.
    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Returns `true` if every `coding_bits` wide bit pattern belongs to some symbol.
    ///
    /// Only a complete codebook can decode every bit string the network produces; with an
    /// incomplete one encryption may fail with [Malformation::UnknownCode].
    pub fn is_complete(&self) -> bool {
        self.symbols.len() as u128 == 1u128 << self.coding_bits
    }

    /// Concatenates the codes of the symbols of `text`.
    pub fn encode(&self, text: &str) -> Result<Bits, FeistelError> {
        let mut bits = Bits::with_capacity(text.len() * self.coding_bits);
        for symbol in text.chars() {
            let code = self
                .codes
                .get(&symbol)
                .ok_or(FeistelError::UnknownSymbol(symbol))?;
            push_word(&mut bits, *code, self.coding_bits);
        }

        Ok(bits)
    }

    /// Maps every `coding_bits` wide chunk of `bits` back to its symbol.
    pub fn decode(&self, bits: &BitStr) -> Result<String, FeistelError> {
        if bits.len() % self.coding_bits != 0 {
            return Err(Malformation::Misaligned {
                len: bits.len(),
                width: self.coding_bits,
            }
            .into());
        }

        bits.chunks_exact(self.coding_bits)
            .map(|chunk| {
                let code = read_word::<u64>(chunk);
                self.symbols.get(&code).copied().ok_or_else(|| {
                    FeistelError::from(Malformation::UnknownCode(format!(
                        "{:0width$b}",
                        code,
                        width = self.coding_bits
                    )))
                })
            })
            .collect()
    }
}
