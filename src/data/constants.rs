//! LaTeX tokens and defaults used by the emitters
//!
//! Every marker an emitter writes lives here so the emitters only deal with
//! ordering.

// ============================================================================
// Cell and row markers
// ============================================================================

/// Separator placed between table cells on one row
pub const CELL_SEPARATOR: &str = " & ";

/// Separator appended to a figure when another figure follows on the same row
pub const FIGURE_SEPARATOR: &str = "&";

/// Row-break marker (`\\`)
pub const ROW_BREAK: &str = "\\\\";

/// Full-width horizontal rule
pub const HLINE: &str = "\\hline";

/// Centering switch inside a float
pub const CENTERING: &str = "\\centering";

// ============================================================================
// longtable pagination markers
// ============================================================================

/// Closes the header used on the first page only
pub const END_FIRST_HEAD: &str = "\\endfirsthead";

/// Closes the header repeated on every following page
pub const END_HEAD: &str = "\\endhead";

/// Closes the footer repeated on every page but the last
pub const END_FOOT: &str = "\\endfoot";

/// Closes the footer of the last page
pub const END_LAST_FOOT: &str = "\\endlastfoot";

/// Default text above the repeated header on continuation pages
pub const DEFAULT_PAGE_HEADER_LABEL: &str =
    "\\tablename\\ \\thetable\\ -- \\textit{Continued from previous page}";

/// Default text at the foot of every page but the last
pub const DEFAULT_PAGE_FOOTER: &str = "\\textit{Continued on next page}";

// ============================================================================
// Defaults
// ============================================================================

/// Float placement specifier used when none is configured
pub const DEFAULT_POSITION: &str = "htbp";

/// Placeholder written in place of missing cell values
pub const DEFAULT_BLANK: &str = "~";

/// Length unit the figure width fraction is multiplied with
pub const DEFAULT_WIDTH_UNIT: &str = "\\textwidth";

/// Figures placed on one row when none is configured
pub const DEFAULT_FIGS_PER_ROW: usize = 2;

/// Default column type when no layout is given
pub const DEFAULT_COLUMN_TYPE: char = 'l';

/// Column type used for every figure slot
pub const FIGURE_COLUMN_TYPE: char = 'c';

// ============================================================================
// Environment helpers
// ============================================================================

/// `\begin{env}`
pub fn begin_env(env: &str) -> String {
    format!("\\begin{{{}}}", env)
}

/// `\end{env}`
pub fn end_env(env: &str) -> String {
    format!("\\end{{{}}}", env)
}

/// `\multicolumn{columns}{l}{text}`, spanning a whole table row
pub fn full_width_multicolumn(columns: usize, text: &str) -> String {
    format!("\\multicolumn{{{}}}{{l}}{{{}}}", columns, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_helpers() {
        assert_eq!(begin_env("tabular"), "\\begin{tabular}");
        assert_eq!(end_env("longtable"), "\\end{longtable}");
    }

    #[test]
    fn test_multicolumn() {
        assert_eq!(
            full_width_multicolumn(3, DEFAULT_PAGE_FOOTER),
            "\\multicolumn{3}{l}{\\textit{Continued on next page}}"
        );
    }
}
