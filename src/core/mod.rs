//! Core emitter modules
//!
//! This module contains the emitters and their shared contract:
//! - `emitter`: line buffer and the prologue/body/epilogue render contract
//! - `figure`: grid of images inside a `figure` float
//! - `table`: `tabular` and `longtable` emitters
//! - `options`: configuration shared by every emitter

pub mod emitter;
pub mod figure;
pub mod options;
pub mod table;

pub use emitter::{Emitter, Fragment};
pub use figure::MultiFigure;
pub use options::EmitterOptions;
pub use table::{format_row, CellValue, ColumnAlign, LongTable, Table};
