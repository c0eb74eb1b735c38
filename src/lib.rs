//! GoPass-Rust: a Go game that pays out a password.
//!
//! A game of Go is recorded move by move; the move sequence, combined with
//! a user-supplied seed phrase, deterministically derives a password
//! string via a seeded per-intersection encoding.
//!
//! ## Modules
//!
//! - [`constants`] - Board and encoder dimensions, character tables
//! - [`board`] - Intersection grid storage
//! - [`analysis`] - Group liberty analysis and capture removal
//! - [`record`] - Move records and the append-only game log
//! - [`game`] - Turn sequencing, captures, suicide resolution
//! - [`encode`] - Seeded per-intersection character encoding
//! - [`password`] - Password derivation over the move log
//! - [`errors`] - Typed library errors
//! - [`cli`] - Interactive session used by the binary
//!
//! ## Example
//!
//! ```
//! use gopass_rust::game::Game;
//! use gopass_rust::password::{PasswordOptions, derive_password};
//!
//! // Play a couple of moves
//! let mut game = Game::new(19, 19);
//! game.play(3, 3).unwrap();
//! game.play(15, 15).unwrap();
//!
//! // Turn the game into a password
//! let options = PasswordOptions::new("correct horse");
//! let derived = derive_password(game.move_log(), &options).unwrap();
//! assert_eq!(derived.password.len(), 4);
//! assert!(derived.short_password);
//! ```

pub mod analysis;
pub mod board;
pub mod cli;
pub mod constants;
pub mod encode;
pub mod errors;
pub mod game;
pub mod password;
pub mod record;
