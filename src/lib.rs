//! # texfrag
//!
//! LaTeX figure, table and longtable fragments from structured data.
//!
//! ## Features
//!
//! - **Figure grids**: `\includegraphics` commands laid out N per row
//! - **Tables**: `tabular` bodies with header row, layout override and blank
//!   placeholders for missing values
//! - **Long tables**: `longtable` pagination with continuation headers/footers
//! - **Data loading** (feature `data-loading`): tables from CSV/JSON, options
//!   from TOML/YAML
//!
//! ## Usage Examples
//!
//! ### Table
//!
//! ```rust
//! use texfrag::{row, Emitter, Table};
//!
//! let mut table = Table::new(2).unwrap();
//! table.set_caption("Scores");
//! table.add_header(["Name", "Score"]).unwrap();
//! table.add_row(row!["Alice", 9]).unwrap();
//! table.add_row(row!["Bob", f64::NAN]).unwrap();
//!
//! let latex = table.render();
//! assert!(latex.starts_with(r"\begin{table}[htbp]"));
//! assert!(latex.contains(r"Bob & ~ \\"));
//! ```
//!
//! ### Figure grid
//!
//! ```rust
//! use texfrag::{Emitter, MultiFigure};
//!
//! let mut figure = MultiFigure::new(2).unwrap();
//! figure.add_figures(["a.png", "b.png"]).unwrap();
//! assert!(figure.render().contains(r"\includegraphics[width=0.5\textwidth]{a.png}&"));
//! ```

/// Core emitter modules
pub mod core;

/// Data layer - LaTeX markers and defaults
pub mod data;

/// Feature modules - optional input adapters
pub mod features;

/// Utility modules
pub mod utils;

use std::path::Path;

// Re-export core types
pub use crate::core::{
    format_row, CellValue, ColumnAlign, Emitter, EmitterOptions, Fragment, LongTable,
    MultiFigure, Table,
};

// Re-export utilities
pub use utils::error::{EmitError, EmitResult};

/// Render a `table` float from a header and rows
///
/// The column count is taken from the header.
pub fn render_table<H, R, V>(header: H, rows: R) -> EmitResult<String>
where
    H: IntoIterator<Item = V>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = V>,
    V: Into<CellValue>,
{
    let header: Vec<CellValue> = header.into_iter().map(Into::into).collect();
    let mut table = Table::new(header.len())?;
    table.add_header(header)?;
    for row in rows {
        table.add_row(row)?;
    }
    Ok(table.render())
}

/// Render a `figure` float placing `figs_per_row` images on each row
pub fn render_figure_grid<I, P>(paths: I, figs_per_row: usize) -> EmitResult<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut figure = MultiFigure::new(figs_per_row)?;
    figure.add_figures(paths)?;
    Ok(figure.render())
}
