//! Multi-page `longtable` emitter
//!
//! The pagination blocks are written in the order longtable expects them:
//!
//! ```text
//! \begin{longtable}[htbp]{lll}
//! \caption{...}\\          first page only
//! \hline
//! A & B & C \\
//! \hline
//! \endfirsthead
//! <continuation label>\\   every other page
//! \hline
//! A & B & C \\
//! \hline
//! \endhead
//! <footer>\\               every page but the last
//! \endfoot
//! \hline                   last page
//! <last footer>\\
//! \endlastfoot
//! ...rows...
//! \end{longtable}
//! ```

use std::fmt;

use super::cell::{CellValue, ColumnAlign};
use super::tabular::Table;
use crate::core::emitter::{Emitter, Fragment};
use crate::core::options::EmitterOptions;
use crate::data::constants::{
    begin_env, end_env, full_width_multicolumn, DEFAULT_PAGE_FOOTER, DEFAULT_PAGE_HEADER_LABEL,
    END_FIRST_HEAD, END_FOOT, END_HEAD, END_LAST_FOOT, HLINE, ROW_BREAK,
};
use crate::utils::error::{EmitError, EmitResult};

/// Table that may break across pages
///
/// The header set with [`LongTable::add_header`] is repeated on every page.
#[derive(Debug, Clone)]
pub struct LongTable {
    table: Table,
    /// Full-width line above the repeated header, e.g. "continued from previous page"
    page_header_label: Option<String>,
    /// Full-width line at the foot of every page but the last
    footer: Option<String>,
    /// Raw text closing the last page
    last_page_footer: Option<String>,
}

impl LongTable {
    pub fn new(columns: usize) -> EmitResult<Self> {
        Self::with_options(columns, EmitterOptions::default())
    }

    pub fn with_options(columns: usize, options: EmitterOptions) -> EmitResult<Self> {
        Ok(LongTable {
            table: Table::with_options(columns, options)?,
            page_header_label: None,
            footer: None,
            last_page_footer: None,
        })
    }

    /// Underlying table state (rows, header, layout)
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn columns(&self) -> usize {
        self.table.columns()
    }

    pub fn options(&self) -> &EmitterOptions {
        self.table.options()
    }

    pub fn header(&self) -> Option<&str> {
        self.table.header()
    }

    pub fn layout(&self) -> String {
        self.table.layout()
    }

    pub fn set_layout(&mut self, layout: impl Into<String>) {
        self.table.set_layout(layout);
    }

    pub fn set_alignments(&mut self, aligns: &[ColumnAlign]) -> EmitResult<()> {
        self.table.set_alignments(aligns)
    }

    /// Add a line emitted after the pagination blocks, before the first row
    pub fn add_hook_before_start(&mut self, line: impl Into<String>) {
        self.table.add_hook_before_start(line);
    }

    pub fn add_row<I, V>(&mut self, values: I) -> EmitResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.table.add_row(values)
    }

    /// Set the header repeated on every page
    pub fn add_header<I, V>(&mut self, values: I) -> EmitResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.table.add_header(values)
    }

    /// A first-page-only header distinct from the repeated one.
    ///
    /// Not supported: the first page shows the caption followed by the
    /// regular header. Always fails.
    pub fn set_first_page_header<I, V>(&mut self, _values: I) -> EmitResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        log::warn!("longtable first page header requested but not supported");
        Err(EmitError::unsupported("longtable first page header"))
    }

    /// Set the line shown above the header on continuation pages
    pub fn set_page_header_label(&mut self, label: &str) {
        self.page_header_label = Some(full_width_multicolumn(self.columns(), label));
    }

    /// "Table N -- Continued from previous page"
    pub fn set_default_page_header_label(&mut self) {
        self.set_page_header_label(DEFAULT_PAGE_HEADER_LABEL);
    }

    /// Set the line shown at the foot of every page but the last
    pub fn set_footer(&mut self, text: &str) {
        self.footer = Some(full_width_multicolumn(self.columns(), text));
    }

    /// "Continued on next page"
    pub fn set_default_footer(&mut self) {
        self.set_footer(DEFAULT_PAGE_FOOTER);
    }

    /// Set the text closing the last page; written as given
    pub fn set_last_page_footer(&mut self, text: impl Into<String>) {
        self.last_page_footer = Some(text.into());
    }
}

impl Emitter for LongTable {
    fn fragment(&self) -> &Fragment {
        self.table.fragment()
    }

    fn fragment_mut(&mut self) -> &mut Fragment {
        self.table.fragment_mut()
    }

    fn prologue(&self) -> Vec<String> {
        let header = self.table.header();
        let mut lines = vec![format!(
            "{}[{}]{{{}}}",
            begin_env("longtable"),
            self.table.options().position,
            self.table.layout()
        )];

        // First page
        if let Some(caption) = self.fragment().caption_line() {
            lines.push(format!("{}{}", caption, ROW_BREAK));
            lines.push(HLINE.to_string());
            if let Some(header) = header {
                lines.push(header.to_string());
                lines.push(HLINE.to_string());
            }
            lines.push(END_FIRST_HEAD.to_string());
        }

        // Every other page
        match (header, &self.page_header_label) {
            (Some(header), label) => {
                if let Some(label) = label {
                    lines.push(format!("{}{}", label, ROW_BREAK));
                }
                lines.push(HLINE.to_string());
                lines.push(header.to_string());
                lines.push(HLINE.to_string());
                lines.push(END_HEAD.to_string());
            }
            (None, Some(label)) => {
                lines.push(format!("{}{}", label, ROW_BREAK));
                lines.push(HLINE.to_string());
                lines.push(END_HEAD.to_string());
            }
            (None, None) => {}
        }

        if let Some(footer) = &self.footer {
            lines.push(format!("{}{}", footer, ROW_BREAK));
            lines.push(END_FOOT.to_string());
        }

        if let Some(last) = &self.last_page_footer {
            lines.push(HLINE.to_string());
            lines.push(format!("{}{}", last, ROW_BREAK));
            lines.push(END_LAST_FOOT.to_string());
        }

        lines.extend(self.table.hooks_before_start().iter().cloned());
        lines
    }

    fn epilogue(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.fragment().label_line().into_iter().collect();
        lines.push(end_env("longtable"));
        lines
    }
}

impl fmt::Display for LongTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
