//! Cell values, column alignment and row formatting

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::constants::{CELL_SEPARATOR, ROW_BREAK};
use crate::utils::error::{EmitError, EmitResult};

/// A single table cell value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CellValue {
    /// No value; rendered as the blank placeholder
    Missing,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Whether the value renders as the blank placeholder
    ///
    /// NaN floats and the literal text `nan` (as produced by stringified
    /// numeric data) both count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Float(v) => v.is_nan(),
            CellValue::Text(s) => s == "nan",
            CellValue::Bool(_) | CellValue::Integer(_) => false,
        }
    }

    /// Interpret raw text: empty text and any spelling of NaN become missing,
    /// everything else is kept verbatim as text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_nan() => CellValue::Missing,
            _ => CellValue::Text(raw.to_string()),
        }
    }

    /// Render the cell, substituting `blank` for missing values
    pub fn to_latex(&self, blank: &str) -> String {
        if self.is_missing() {
            blank.to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing => Ok(()),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Integer(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{:?}", v),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::Text(s.clone())
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Float(f64::from(v))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(v: $t) -> Self {
                    CellValue::Integer(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for CellValue {
    fn from(v: usize) -> Self {
        i64::try_from(v)
            .map(CellValue::Integer)
            .unwrap_or_else(|_| CellValue::Text(v.to_string()))
    }
}

impl From<u64> for CellValue {
    fn from(v: u64) -> Self {
        i64::try_from(v)
            .map(CellValue::Integer)
            .unwrap_or_else(|_| CellValue::Text(v.to_string()))
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Missing)
    }
}

/// Build a `Vec<CellValue>` from values of mixed types
///
/// ```
/// use texfrag::{row, CellValue};
///
/// let cells = row!["Alice", 9, f64::NAN];
/// assert_eq!(cells[1], CellValue::Integer(9));
/// assert!(cells[2].is_missing());
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::CellValue::from($value)),*]
    };
}

/// LaTeX column alignment options
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
    /// Paragraph column with width, e.g. `p{3cm}`
    Paragraph(String),
}

impl ColumnAlign {
    /// Convert to a LaTeX column specification
    pub fn to_spec(&self) -> String {
        match self {
            ColumnAlign::Left => "l".to_string(),
            ColumnAlign::Center => "c".to_string(),
            ColumnAlign::Right => "r".to_string(),
            ColumnAlign::Paragraph(width) => format!("p{{{}}}", width),
        }
    }
}

/// Format one row: cells joined by ` & `, terminated by ` \\`
///
/// Fails when `values` does not hold exactly `columns` cells.
pub fn format_row(values: &[CellValue], columns: usize, blank: &str) -> EmitResult<String> {
    if values.len() != columns {
        return Err(EmitError::column_count(columns, values.len()));
    }
    let cells: Vec<String> = values.iter().map(|v| v.to_latex(blank)).collect();
    Ok(format!("{} {}", cells.join(CELL_SEPARATOR), ROW_BREAK))
}
