//! Integration tests for texfrag emitters

use texfrag::{
    render_figure_grid, render_table, row, CellValue, EmitError, Emitter, EmitterOptions,
    LongTable, MultiFigure, Table,
};

// ============================================================================
// Tables
// ============================================================================

mod tables {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scores_table() {
        let mut table = Table::new(2).unwrap();
        table.add_header(["Name", "Score"]).unwrap();
        table.add_row(row!["Alice", 9]).unwrap();
        table.add_row(row!["Bob", f64::NAN]).unwrap();

        assert_eq!(table.fragment().len(), 2);
        assert_eq!(table.header(), Some("Name & Score \\\\"));
        assert_eq!(table.fragment().lines()[1], "Bob & ~ \\\\");

        let latex = table.render();
        assert!(latex.starts_with("\\begin{table}"));
        assert!(latex.ends_with("\\end{table}"));
    }

    #[test]
    fn test_row_arity() {
        for columns in 1..=5 {
            let mut table = Table::new(columns).unwrap();
            let exact: Vec<CellValue> = (0..columns).map(CellValue::from).collect();
            table.add_row(exact).unwrap();
            assert_eq!(table.fragment().len(), 1);
            assert_eq!(
                table.fragment().lines()[0].matches(" & ").count(),
                columns - 1
            );

            for wrong in [columns - 1, columns + 1] {
                let values: Vec<CellValue> = (0..wrong).map(CellValue::from).collect();
                let err = table.add_row(values).unwrap_err();
                assert_eq!(err, EmitError::column_count(columns, wrong));
                assert_eq!(table.fragment().len(), 1);
            }
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut table = Table::new(2).unwrap();
        table.set_caption("c");
        table.add_header(["a", "b"]).unwrap();
        table.add_row(row![1, 2.5]).unwrap();
        let first = table.render();
        let second = table.render();
        assert_eq!(first, second);
        assert_eq!(table.fragment().len(), 1);
    }

    #[test]
    fn test_display_matches_render() {
        let mut table = Table::new(1).unwrap();
        table.add_row(["x"]).unwrap();
        assert_eq!(format!("{}", table), table.render());
    }

    #[test]
    fn test_render_table_helper() {
        let latex = render_table(["k", "v"], [["a", "1"], ["b", "2"]]).unwrap();
        assert!(latex.contains("k & v \\\\\n\\hline\na & 1 \\\\\nb & 2 \\\\"));
    }

    #[test]
    fn test_emitters_as_trait_objects() {
        let mut table = Table::new(1).unwrap();
        table.add_row(["t"]).unwrap();
        let mut figure = MultiFigure::new(1).unwrap();
        figure.add_figure("f.png").unwrap();

        let emitters: Vec<Box<dyn Emitter>> = vec![Box::new(table), Box::new(figure)];
        let rendered: Vec<String> = emitters.iter().map(|e| e.render()).collect();
        assert!(rendered[0].ends_with("\\end{table}"));
        assert!(rendered[1].ends_with("\\end{figure}"));
    }
}

// ============================================================================
// Figures
// ============================================================================

mod figures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_side_by_side() {
        let mut figure = MultiFigure::new(2).unwrap();
        figure.add_figure("a.png").unwrap();
        assert!(!figure.fragment().lines()[0].ends_with('&'));
        figure.add_figure("b.png").unwrap();

        let lines = figure.fragment().lines();
        assert!(lines[0].ends_with("{a.png}&"));
        assert!(lines[1].ends_with("{b.png}\\\\"));
    }

    #[test]
    fn test_row_counter_cycles() {
        for per_row in 1..=4 {
            let mut figure = MultiFigure::new(per_row).unwrap();
            for i in 0..per_row {
                figure.add_figure(format!("{}.png", i)).unwrap();
                let last = figure.fragment().lines().last().unwrap();
                if i + 1 < per_row {
                    assert!(!last.ends_with("\\\\"));
                } else {
                    assert!(last.ends_with("\\\\"));
                }
            }
            assert_eq!(figure.column(), 1);
        }
    }

    #[test]
    fn test_path_types() {
        let mut figure = MultiFigure::new(2).unwrap();
        figure.add_figure(std::path::PathBuf::from("plots/a.pdf")).unwrap();
        figure.add_figure(String::from("plots/b.pdf")).unwrap();
        assert!(figure.render().contains("{plots/b.pdf}\\\\"));
    }

    #[test]
    fn test_figure_grid_helper() {
        let latex = render_figure_grid(["x.png"], 2).unwrap();
        assert!(latex.contains("\\begin{tabular}{cc}\n\\includegraphics[width=0.5\\textwidth]{x.png}\n\\end{tabular}"));
    }
}

// ============================================================================
// Long tables
// ============================================================================

mod long_tables {
    use super::*;
    use pretty_assertions::assert_eq;

    fn position(lines: &[&str], needle: &str) -> usize {
        lines
            .iter()
            .position(|l| *l == needle)
            .unwrap_or_else(|| panic!("missing line {:?}", needle))
    }

    #[test]
    fn test_caption_header_last_footer_order() {
        let mut table = LongTable::new(3).unwrap();
        table.set_caption("Long");
        table.add_header(["a", "b", "c"]).unwrap();
        table.set_last_page_footer("fin");
        table.add_row([1, 2, 3]).unwrap();
        table.add_row([4, 5, 6]).unwrap();

        let latex = table.render();
        let lines: Vec<&str> = latex.lines().collect();

        let open = position(&lines, "\\begin{longtable}[htbp]{lll}");
        let caption = position(&lines, "\\caption{Long}\\\\");
        let first_head = position(&lines, "\\endfirsthead");
        let head = position(&lines, "\\endhead");
        let last_foot = position(&lines, "\\endlastfoot");
        let first_row = position(&lines, "1 & 2 & 3 \\\\");
        let close = position(&lines, "\\end{longtable}");

        assert_eq!(open, 0);
        assert_eq!(caption, 1);
        assert_eq!(lines[caption + 1], "\\hline");
        assert_eq!(lines[caption + 2], "a & b & c \\\\");
        assert_eq!(lines[caption + 3], "\\hline");
        assert_eq!(first_head, caption + 4);
        assert!(first_head < head);
        assert_eq!(lines[last_foot - 1], "fin\\\\");
        assert!(head < last_foot);
        assert_eq!(first_row, last_foot + 1);
        assert_eq!(close, lines.len() - 1);
        assert!(!latex.contains("\\end{tabular}"));
    }

    #[test]
    fn test_first_page_header_unsupported() {
        let mut table = LongTable::new(2).unwrap();
        assert_eq!(
            table.set_first_page_header(["x", "y"]),
            Err(EmitError::unsupported("longtable first page header"))
        );
    }

    #[test]
    fn test_options_position() {
        let mut table = LongTable::with_options(2, EmitterOptions::new().with_position("c")).unwrap();
        table.add_row(row!["a", None::<i32>]).unwrap();
        assert_eq!(
            table.render(),
            "\\begin{longtable}[c]{ll}\na & ~ \\\\\n\\end{longtable}"
        );
    }
}
