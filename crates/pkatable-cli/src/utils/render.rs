use pkatable::core::io::table::COLUMNS;
use pkatable::core::models::summary::JoinedRecord;

/// Renders rows as a right-aligned text table with a leading row-index column.
pub fn render_table(rows: &[JoinedRecord]) -> String {
    if rows.is_empty() {
        return format!("Empty table\nColumns: [{}]", COLUMNS.join(", "));
    }

    let header: Vec<String> = std::iter::once(String::new())
        .chain(COLUMNS.iter().map(|c| c.to_string()))
        .collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                i.to_string(),
                r.residue.clone(),
                format_value(r.e),
                format_value(r.pka),
                format_value(r.charge),
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(&body)
                .map(|line| line[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    std::iter::once(&header)
        .chain(&body)
        .map(|line| {
            line.iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:>w$}", cell, w = w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_aligned_rows() {
        let rows = vec![
            JoinedRecord {
                residue: "ASP A  ".to_string(),
                e: 0.12,
                pka: 3.1,
                charge: -1.0,
            },
            JoinedRecord {
                residue: "LYS B  ".to_string(),
                e: -12.5,
                pka: 10.4,
                charge: 0.75,
            },
        ];

        let rendered = render_table(&rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   residue      e   pka  charge");
        assert_eq!(lines[1], "0  ASP A     0.12   3.1    -1.0");
        assert_eq!(lines[2], "1  LYS B    -12.5  10.4    0.75");
    }

    #[test]
    fn nan_is_shown_explicitly() {
        let rows = vec![JoinedRecord {
            residue: "GLU".to_string(),
            e: 1.0,
            pka: f64::NAN,
            charge: 0.5,
        }];
        assert!(render_table(&rows).contains("NaN"));
    }

    #[test]
    fn empty_table_lists_columns() {
        assert_eq!(
            render_table(&[]),
            "Empty table\nColumns: [residue, e, pka, charge]"
        );
    }
}
