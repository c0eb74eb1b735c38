//! Seeded character encoding of board intersections.
//!
//! An [`EncodedBoard`] assigns every intersection of a fixed 19x19 grid a
//! short random string, generated once from a 64-bit seed and immutable
//! afterwards. The PRNG stream is consumed in a fixed order — rows, then
//! columns, then character by character within a cell — so equal seeds
//! always produce byte-identical boards. Password derivation looks moves up
//! on this grid.

use crate::constants::{ENCODE_BOARD_SIZE, SELECT_SYMBOLS};

/// Which character classes the encoder may emit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SymbolPolicy {
    /// Every printable ASCII character from `!` (33) up to but excluding 126.
    AllSymbols,
    /// Alphanumerics plus the ten symbols in [`SELECT_SYMBOLS`].
    SomeSymbols,
    /// Alphanumerics only.
    NoSymbols,
}

/// A 19x19 grid of random strings, `chars_per_move` characters each.
pub struct EncodedBoard {
    cells: Vec<String>,
    chars_per_move: usize,
}

impl EncodedBoard {
    /// Generates the grid from a seed. `chars_per_move` must be positive.
    pub fn new(seed: u64, chars_per_move: usize, policy: SymbolPolicy) -> Self {
        assert!(chars_per_move > 0, "chars_per_move must be positive");

        let mut rng = fastrand::Rng::with_seed(seed);
        let mut cells = Vec::with_capacity(ENCODE_BOARD_SIZE * ENCODE_BOARD_SIZE);
        for _row in 0..ENCODE_BOARD_SIZE {
            for _col in 0..ENCODE_BOARD_SIZE {
                let mut cell = String::with_capacity(chars_per_move);
                for _ in 0..chars_per_move {
                    cell.push(random_char(&mut rng, policy));
                }
                cells.push(cell);
            }
        }

        Self {
            cells,
            chars_per_move,
        }
    }

    pub fn chars_per_move(&self) -> usize {
        self.chars_per_move
    }

    /// The encoded string at an intersection, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        if row >= ENCODE_BOARD_SIZE || col >= ENCODE_BOARD_SIZE {
            return None;
        }
        Some(self.cells[row * ENCODE_BOARD_SIZE + col].as_str())
    }
}

fn random_char(rng: &mut fastrand::Rng, policy: SymbolPolicy) -> char {
    match policy {
        SymbolPolicy::AllSymbols => rng.u8(33..126) as char,
        SymbolPolicy::SomeSymbols => select_symbol(rng),
        SymbolPolicy::NoSymbols => non_symbol(rng),
    }
}

/// One draw picks the kind: values 62..72 map 1:1 onto the symbol table,
/// anything below falls through to the alphanumeric rule with its own
/// fresh draws.
fn select_symbol(rng: &mut fastrand::Rng) -> char {
    let kind = rng.usize(..62 + SELECT_SYMBOLS.len());
    if kind < 62 {
        return non_symbol(rng);
    }
    SELECT_SYMBOLS[kind - 62]
}

/// Two draws, in this order: a bucket over the 62 alphanumerics (10 digits,
/// 26 uppercase, 26 lowercase), then the character code within the bucket.
fn non_symbol(rng: &mut fastrand::Rng) -> char {
    let kind = rng.usize(..62);
    let code = if kind < 10 {
        rng.u8(b'0'..=b'9')
    } else if kind < 36 {
        rng.u8(b'A'..=b'Z')
    } else {
        rng.u8(b'a'..=b'z')
    };
    code as char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_chars(board: &EncodedBoard) -> impl Iterator<Item = char> + '_ {
        (0..ENCODE_BOARD_SIZE).flat_map(move |row| {
            (0..ENCODE_BOARD_SIZE).flat_map(move |col| board.cell(row, col).unwrap().chars())
        })
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = EncodedBoard::new(42, 2, SymbolPolicy::AllSymbols);
        let b = EncodedBoard::new(42, 2, SymbolPolicy::AllSymbols);
        for row in 0..ENCODE_BOARD_SIZE {
            for col in 0..ENCODE_BOARD_SIZE {
                assert_eq!(a.cell(row, col), b.cell(row, col));
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = EncodedBoard::new(42, 2, SymbolPolicy::AllSymbols);
        let b = EncodedBoard::new(43, 2, SymbolPolicy::AllSymbols);
        let differs = (0..ENCODE_BOARD_SIZE)
            .any(|row| (0..ENCODE_BOARD_SIZE).any(|col| a.cell(row, col) != b.cell(row, col)));
        assert!(differs, "361 cells agreeing across seeds would be absurd");
    }

    #[test]
    fn test_cell_lengths_and_bounds() {
        let board = EncodedBoard::new(7, 3, SymbolPolicy::NoSymbols);
        assert_eq!(board.chars_per_move(), 3);
        assert_eq!(board.cell(0, 0).unwrap().len(), 3);
        assert_eq!(board.cell(18, 18).unwrap().len(), 3);
        assert_eq!(board.cell(19, 0), None);
        assert_eq!(board.cell(0, 19), None);
    }

    #[test]
    fn test_all_symbols_stays_printable() {
        let board = EncodedBoard::new(1, 4, SymbolPolicy::AllSymbols);
        for ch in all_chars(&board) {
            let code = ch as u32;
            assert!((33..126).contains(&code), "{ch:?} out of range");
        }
    }

    #[test]
    fn test_no_symbols_is_alphanumeric() {
        let board = EncodedBoard::new(2, 4, SymbolPolicy::NoSymbols);
        for ch in all_chars(&board) {
            assert!(ch.is_ascii_alphanumeric(), "{ch:?} is not alphanumeric");
        }
    }

    #[test]
    fn test_some_symbols_stays_in_its_charset() {
        let board = EncodedBoard::new(3, 4, SymbolPolicy::SomeSymbols);
        for ch in all_chars(&board) {
            assert!(
                ch.is_ascii_alphanumeric() || SELECT_SYMBOLS.contains(&ch),
                "{ch:?} not allowed under SomeSymbols"
            );
        }
    }

    #[test]
    #[should_panic(expected = "chars_per_move must be positive")]
    fn test_zero_chars_per_move_panics() {
        EncodedBoard::new(0, 0, SymbolPolicy::AllSymbols);
    }
}
