//! Password derivation over a move log.
//!
//! The derivation walks the log in order. Each stone placement contributes
//! the encoded string at its intersection; after every chunk the encoder is
//! rebuilt from the *original* seed plus a fold of the chunk just emitted.
//! Only the immediately preceding chunk feeds the next step — the re-seed
//! is never cumulative over the whole history. Pass records contribute
//! nothing and do not re-seed.

use tracing::trace;

use crate::constants::{DEFAULT_CHARS_PER_MOVE, SHORT_PASSWORD_LEN};
use crate::encode::{EncodedBoard, SymbolPolicy};
use crate::errors::DeriveError;
use crate::record::{Move, MoveLog};

/// Folds a string into a 64-bit seed.
///
/// The value starts at the string's length, then adds every character code
/// multiplied by its 1-based position (wrapping). The position weight makes
/// anagrams fold differently: "top" and "pot" give distinct seeds. The same
/// fold is applied to the user's seed phrase and to each emitted chunk
/// during derivation.
pub fn seed_from_phrase(phrase: &str) -> u64 {
    let mut value = phrase.chars().count() as u64;
    for (i, ch) in phrase.chars().enumerate() {
        value = value.wrapping_add((ch as u64).wrapping_mul(i as u64 + 1));
    }
    value
}

/// Configuration for one derivation request.
#[derive(Copy, Clone, Debug)]
pub struct PasswordOptions<'a> {
    /// The user's seed phrase. May be empty, which flags the result.
    pub seed_phrase: &'a str,
    /// Characters emitted per stone placement. Must be positive.
    pub chars_per_move: usize,
    pub policy: SymbolPolicy,
}

impl<'a> PasswordOptions<'a> {
    /// Defaults: 2 characters per move, all symbols allowed.
    pub fn new(seed_phrase: &'a str) -> Self {
        Self {
            seed_phrase,
            chars_per_move: DEFAULT_CHARS_PER_MOVE,
            policy: SymbolPolicy::AllSymbols,
        }
    }
}

/// A derived password plus its advisory flags. The flags annotate a
/// successful result; they are never errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedPassword {
    pub password: String,
    /// The output came out shorter than 12 characters.
    pub short_password: bool,
    /// The seed phrase was empty.
    pub no_seed: bool,
}

/// Derives the password for a move log.
///
/// # Errors
///
/// [`DeriveError::OutsideEncodeBoard`] when a recorded placement lies
/// outside the fixed 19x19 encode board (possible when the game was played
/// on a larger grid).
pub fn derive_password(
    log: &MoveLog,
    options: &PasswordOptions<'_>,
) -> Result<DerivedPassword, DeriveError> {
    let seed = seed_from_phrase(options.seed_phrase);
    let mut encoded = EncodedBoard::new(seed, options.chars_per_move, options.policy);
    let mut password = String::new();

    for (index, record) in log.iter().enumerate() {
        let Move::Play { row, col } = record.mv else {
            continue;
        };
        let chunk = encoded
            .cell(row, col)
            .ok_or(DeriveError::OutsideEncodeBoard { index, row, col })?;
        password.push_str(chunk);
        trace!(index, chunk, "encoded move");

        let delta = seed_from_phrase(chunk);
        encoded = EncodedBoard::new(
            seed.wrapping_add(delta),
            options.chars_per_move,
            options.policy,
        );
    }

    Ok(DerivedPassword {
        short_password: password.len() < SHORT_PASSWORD_LEN,
        no_seed: options.seed_phrase.is_empty(),
        password,
    })
}
