//! Constants for board geometry and password encoding.
//!
//! The game board is a runtime-sized rectangular grid; the constants here
//! are its defaults and lower bound. The encode board that backs password
//! derivation is a separate grid with a fixed size, independent of how
//! large the game board is.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board side length. Standard Go is played on 19x19.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Smallest accepted board dimension. Requests below this are clamped up,
/// not rejected.
pub const MIN_BOARD_DIM: usize = 2;

// =============================================================================
// Encode Board
// =============================================================================

/// Side length of the encode board, fixed at 19 regardless of the game
/// board's dimensions.
pub const ENCODE_BOARD_SIZE: usize = 19;

/// Default number of password characters generated per intersection.
pub const DEFAULT_CHARS_PER_MOVE: usize = 2;

/// The ten symbols the `SomeSymbols` policy may emit, chosen to be easy to
/// type and hard to misread. Order matters: the encoder maps draw values
/// onto this table by index.
pub const SELECT_SYMBOLS: [char; 10] = ['!', '@', '$', '%', '^', '*', '-', '_', '+', '='];

// =============================================================================
// Advisory Thresholds
// =============================================================================

/// Derived passwords shorter than this get the short-password warning.
pub const SHORT_PASSWORD_LEN: usize = 12;
