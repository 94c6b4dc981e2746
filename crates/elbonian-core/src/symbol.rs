//! The Elbonian symbol table as static data.
//!
//! Classifier, validator and codec all consume this one table instead of
//! carrying their own per-character `match` ladders.

/// One row of the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    pub ch: char,
    /// Signed contribution to the decoded value. Lowercase prefixes are
    /// negative, so the pair vV sums to 5 - 1 = 4.
    pub weight: i32,
    /// Group rank, 0 for M down to 6 for I. Both members of a subtractive
    /// pair share a rank.
    pub rank: u8,
    /// For the three lowercase prefixes, the uppercase partner that must
    /// immediately follow.
    pub pair_upper: Option<char>,
}

/// All ten symbols in descending group order (M > {d,D} > C > {l,L} > X >
/// {v,V} > I). Within a shared rank the lowercase prefix sorts first.
pub const SYMBOLS: [SymbolInfo; 10] = [
    SymbolInfo { ch: 'M', weight: 1000, rank: 0, pair_upper: None },
    SymbolInfo { ch: 'd', weight: -100, rank: 1, pair_upper: Some('D') },
    SymbolInfo { ch: 'D', weight: 500, rank: 1, pair_upper: None },
    SymbolInfo { ch: 'C', weight: 100, rank: 2, pair_upper: None },
    SymbolInfo { ch: 'l', weight: -10, rank: 3, pair_upper: Some('L') },
    SymbolInfo { ch: 'L', weight: 50, rank: 3, pair_upper: None },
    SymbolInfo { ch: 'X', weight: 10, rank: 4, pair_upper: None },
    SymbolInfo { ch: 'v', weight: -1, rank: 5, pair_upper: Some('V') },
    SymbolInfo { ch: 'V', weight: 5, rank: 5, pair_upper: None },
    SymbolInfo { ch: 'I', weight: 1, rank: 6, pair_upper: None },
];

/// Look a character up in the symbol table.
pub fn lookup(c: char) -> Option<&'static SymbolInfo> {
    SYMBOLS.iter().find(|s| s.ch == c)
}
