//! `table` float wrapping a `tabular` environment

use std::fmt;

use super::cell::{format_row, CellValue, ColumnAlign};
use crate::core::emitter::{Emitter, Fragment};
use crate::core::options::EmitterOptions;
use crate::data::constants::{begin_env, end_env, CENTERING, DEFAULT_COLUMN_TYPE, HLINE};
use crate::utils::error::{EmitError, EmitResult};

/// Table emitter
///
/// Rows are appended in order; the optional header sits in its own slot and
/// is rendered above the body, separated by `\hline`.
#[derive(Debug, Clone)]
pub struct Table {
    fragment: Fragment,
    options: EmitterOptions,
    columns: usize,
    /// Explicit column layout, overrides `l` for every column
    layout: Option<String>,
    /// Formatted header row
    header: Option<String>,
    /// Extra lines written just before `\begin{tabular}`
    hooks_before_start: Vec<String>,
}

impl Table {
    /// Create a table with a fixed number of columns
    pub fn new(columns: usize) -> EmitResult<Self> {
        Self::with_options(columns, EmitterOptions::default())
    }

    pub fn with_options(columns: usize, options: EmitterOptions) -> EmitResult<Self> {
        if columns == 0 {
            return Err(EmitError::invalid_config(
                "a table needs at least one column",
            ));
        }
        Ok(Table {
            fragment: Fragment::new(),
            options,
            columns,
            layout: None,
            header: None,
            hooks_before_start: Vec::new(),
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    /// Formatted header row, if one is set
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn hooks_before_start(&self) -> &[String] {
        &self.hooks_before_start
    }

    /// Effective column layout
    pub fn layout(&self) -> String {
        match &self.layout {
            Some(layout) => layout.clone(),
            None => std::iter::repeat(DEFAULT_COLUMN_TYPE)
                .take(self.columns)
                .collect(),
        }
    }

    /// Override the column layout with a raw string such as `|l|r|`
    pub fn set_layout(&mut self, layout: impl Into<String>) {
        self.layout = Some(layout.into());
    }

    /// Override the column layout with one alignment per column
    pub fn set_alignments(&mut self, aligns: &[ColumnAlign]) -> EmitResult<()> {
        if aligns.len() != self.columns {
            return Err(EmitError::column_count(self.columns, aligns.len()));
        }
        self.layout = Some(aligns.iter().map(ColumnAlign::to_spec).collect());
        Ok(())
    }

    /// Add a line emitted right before the tabular opens, e.g. `\small`
    pub fn add_hook_before_start(&mut self, line: impl Into<String>) {
        self.hooks_before_start.push(line.into());
    }

    fn format(&self, values: &[CellValue]) -> EmitResult<String> {
        format_row(values, self.columns, &self.options.blank)
    }

    /// Append one data row; `values` must hold exactly `columns` cells
    pub fn add_row<I, V>(&mut self, values: I) -> EmitResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let values: Vec<CellValue> = values.into_iter().map(Into::into).collect();
        let line = self.format(&values)?;
        log::trace!("table row {}: {}", self.fragment.len() + 1, line);
        self.fragment.push(line);
        Ok(())
    }

    /// Set the header row, replacing any previous one
    pub fn add_header<I, V>(&mut self, values: I) -> EmitResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let values: Vec<CellValue> = values.into_iter().map(Into::into).collect();
        let line = self.format(&values)?;
        if let Some(previous) = self.header.replace(line) {
            log::debug!("replacing table header {}", previous);
        }
        Ok(())
    }
}

impl Emitter for Table {
    fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    fn fragment_mut(&mut self) -> &mut Fragment {
        &mut self.fragment
    }

    fn prologue(&self) -> Vec<String> {
        let mut lines = vec![format!("{}[{}]", begin_env("table"), self.options.position)];
        if let Some(caption) = self.fragment.caption_line() {
            lines.push(caption);
        }
        if self.options.centering {
            lines.push(CENTERING.to_string());
        }
        lines.extend(self.hooks_before_start.iter().cloned());
        lines.push(format!("{}{{{}}}", begin_env("tabular"), self.layout()));
        if let Some(header) = &self.header {
            lines.push(header.clone());
            lines.push(HLINE.to_string());
        }
        lines
    }

    fn epilogue(&self) -> Vec<String> {
        let mut lines = vec![end_env("tabular")];
        if let Some(label) = self.fragment.label_line() {
            lines.push(label);
        }
        lines.push(end_env("table"));
        lines
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
