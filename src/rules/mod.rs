//! Game rules for omok
//!
//! Plain five-in-a-row: no captures, no forbidden moves, overlines win.

pub mod win;

// Re-exports for convenient access
pub use win::{
    count_direction, find_five_line_at_pos, has_five_at_pos, line_length, DIRECTIONS, WIN_LENGTH,
};
