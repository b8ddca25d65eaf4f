//! Multi-figure emitter
//!
//! Lays out `\includegraphics` commands in a `tabular` grid inside a
//! `figure` float, `figs_per_row` images per row:
//!
//! ```text
//! \begin{figure}[htbp]
//! \centering
//! \begin{tabular}{cc}
//! \includegraphics[width=0.5\textwidth]{a.png}&
//! \includegraphics[width=0.5\textwidth]{b.png}\\
//! \end{tabular}
//! \end{figure}
//! ```

use std::fmt;
use std::path::Path;

use super::emitter::{Emitter, Fragment};
use super::options::EmitterOptions;
use crate::data::constants::{
    begin_env, end_env, CENTERING, DEFAULT_FIGS_PER_ROW, FIGURE_COLUMN_TYPE, FIGURE_SEPARATOR,
    ROW_BREAK,
};
use crate::utils::error::{EmitError, EmitResult};

/// Grid of figures inside one float
#[derive(Debug, Clone)]
pub struct MultiFigure {
    fragment: Fragment,
    options: EmitterOptions,
    figs_per_row: usize,
    /// 1-indexed column the next figure lands in
    column: usize,
}

impl MultiFigure {
    /// Create an emitter placing `figs_per_row` figures on each row
    pub fn new(figs_per_row: usize) -> EmitResult<Self> {
        Self::with_options(figs_per_row, EmitterOptions::default())
    }

    pub fn with_options(figs_per_row: usize, options: EmitterOptions) -> EmitResult<Self> {
        if figs_per_row == 0 {
            return Err(EmitError::invalid_config(
                "a figure grid needs at least one figure per row",
            ));
        }
        Ok(MultiFigure {
            fragment: Fragment::new(),
            options,
            figs_per_row,
            column: 1,
        })
    }

    pub fn figs_per_row(&self) -> usize {
        self.figs_per_row
    }

    /// Column the next figure will occupy (1-indexed)
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    /// Width of a single figure, e.g. `0.5\textwidth`
    pub fn width(&self) -> String {
        format!(
            "{:?}{}",
            1.0 / self.figs_per_row as f64,
            self.options.width_unit
        )
    }

    /// Append one figure to the grid
    pub fn add_figure(&mut self, path: impl AsRef<Path>) -> EmitResult<()> {
        let column = self.column;

        let (terminator, next_column) = if column < self.figs_per_row {
            ("", column + 1)
        } else if column == self.figs_per_row {
            (ROW_BREAK, 1)
        } else {
            return Err(EmitError::InvalidGridState {
                column,
                figs_per_row: self.figs_per_row,
            });
        };

        // Another figure joins the row: separate it from the previous one
        if !self.fragment.is_empty() && column > 1 {
            self.fragment.extend_last(FIGURE_SEPARATOR);
        }

        let path = path.as_ref().to_string_lossy();
        log::trace!("figure {} placed in column {}", path, column);
        self.fragment.push(format!(
            "\\includegraphics[width={}]{{{}}}{}",
            self.width(),
            path,
            terminator
        ));

        if next_column == 1 {
            log::debug!(
                "figure row complete after {} figures",
                self.fragment.len()
            );
        }
        self.column = next_column;
        Ok(())
    }

    /// Append several figures, stopping at the first failure
    pub fn add_figures<I, P>(&mut self, paths: I) -> EmitResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.add_figure(path)?;
        }
        Ok(())
    }
}

impl Emitter for MultiFigure {
    fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    fn fragment_mut(&mut self) -> &mut Fragment {
        &mut self.fragment
    }

    fn prologue(&self) -> Vec<String> {
        let mut lines = vec![format!("{}[{}]", begin_env("figure"), self.options.position)];
        if let Some(caption) = self.fragment.caption_line() {
            lines.push(caption);
        }
        if self.options.centering {
            lines.push(CENTERING.to_string());
        }
        let layout: String = std::iter::repeat(FIGURE_COLUMN_TYPE)
            .take(self.figs_per_row)
            .collect();
        lines.push(format!("{}{{{}}}", begin_env("tabular"), layout));
        lines
    }

    fn epilogue(&self) -> Vec<String> {
        let mut lines = vec![end_env("tabular")];
        if let Some(label) = self.fragment.label_line() {
            lines.push(label);
        }
        lines.push(end_env("figure"));
        lines
    }
}

impl Default for MultiFigure {
    fn default() -> Self {
        MultiFigure {
            fragment: Fragment::new(),
            options: EmitterOptions::default(),
            figs_per_row: DEFAULT_FIGS_PER_ROW,
            column: 1,
        }
    }
}

impl fmt::Display for MultiFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
