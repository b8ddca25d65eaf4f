//! Table emitters
//!
//! Row data to LaTeX `tabular` and `longtable` environments.
//!
//! # Architecture
//!
//! ```text
//! values -> CellValue -> format_row -> body line / header slot -> Emitter::render
//! ```
//!
//! # Example
//!
//! ```
//! use texfrag::{row, Emitter, Table};
//!
//! let mut table = Table::new(2).unwrap();
//! table.add_header(["Name", "Score"]).unwrap();
//! table.add_row(row!["Alice", 9]).unwrap();
//! let latex = table.render();
//! assert!(latex.contains("Name & Score \\\\"));
//! ```

mod cell;
mod longtable;
mod tabular;


// Re-export public API
pub use cell::{format_row, CellValue, ColumnAlign};
pub use longtable::LongTable;
pub use tabular::Table;
