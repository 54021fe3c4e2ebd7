//! Canonical checkers rule constants.
//!
//! Board geometry, opening layout and the starting diagram used to set up
//! and validate game state.

pub const BOARD_SIZE: usize = 8;

pub const BLACK_START_ROWS: [usize; 3] = [0, 1, 2];
pub const RED_START_ROWS: [usize; 3] = [5, 6, 7];

/// The four diagonal unit steps as `(d_row, d_col)`, in generation order.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Standard opening position in diagram form (row 0 first).
pub const STARTING_POSITION_DIAGRAM: &str = "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.
";
