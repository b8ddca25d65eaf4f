//! Data layer - LaTeX markers and defaults
//!
//! Static tokens shared by the figure and table emitters.

pub mod constants;

// Re-export commonly used items
pub use constants::{
    CELL_SEPARATOR, DEFAULT_BLANK, DEFAULT_PAGE_FOOTER, DEFAULT_PAGE_HEADER_LABEL,
    DEFAULT_POSITION, DEFAULT_WIDTH_UNIT, HLINE, ROW_BREAK,
};
