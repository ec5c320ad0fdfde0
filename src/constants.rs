//! Constants for board geometry, engine parameters, and rendering.
//!
//! The board is a rhombus of hexagonal cells stored row-major in a 2D
//! coordinate space. Neighbors are found through a fixed table of axial
//! offsets rather than a padded 1D layout.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when the player asks for something unusable.
pub const DEFAULT_SIZE: usize = 9;

/// Offsets `(drow, dcol)` to the six neighbors of a hex cell.
///
/// Order: North, North-East, West, East, South-West, South.
pub const HEX_DIRECTIONS: [(isize, isize); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Number of random playouts per evaluated position.
pub const PLAYOUTS: usize = 1000;

// =============================================================================
// Rendering Glyphs
// =============================================================================

/// White stone (connects top row to bottom row).
pub const WHITE_GLYPH: char = 'W';

/// Black stone (connects left column to right column).
pub const BLACK_GLYPH: char = 'B';

/// Empty cell.
pub const EMPTY_GLYPH: char = '+';

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";
