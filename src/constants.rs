//! Board-size configuration and rendering glyphs.
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//! - `board19x19`: 19x19 board
//!
//! The size only seeds the CLI and the text protocol; [`Board`](crate::board::Board)
//! itself accepts any positive size at runtime.
//!
//! ```sh
//! cargo build                                                # 9x9 (default)
//! cargo build --no-default-features --features board19x19   # 19x19
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board9x9")]
pub const DEFAULT_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_SIZE: usize = 13;

#[cfg(feature = "board19x19")]
pub const DEFAULT_SIZE: usize = 19;

#[cfg(any(
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19"),
))]
compile_error!("Enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'");

#[cfg(not(any(feature = "board9x9", feature = "board13x13", feature = "board19x19")))]
compile_error!("Must enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'");

// =============================================================================
// Glyphs
// =============================================================================

/// Black stone.
pub const GLYPH_BLACK: char = 'b';

/// White stone.
pub const GLYPH_WHITE: char = 'w';

/// Empty intersection.
pub const GLYPH_EMPTY: char = '-';
