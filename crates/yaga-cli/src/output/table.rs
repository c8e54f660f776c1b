//! Plain-text table layout for `--format table`.

const MIN_COLUMN_WIDTH: usize = 4;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

struct Column {
    width: usize,
    min_width: usize,
    right_align: bool,
}

/// Render an aligned table. Numeric columns are right-aligned.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let cells = || rows.iter().map(move |row| cell(row, index));
            let header_width = header.chars().count();
            Column {
                width: cells()
                    .map(|value| value.chars().count())
                    .fold(header_width, usize::max),
                min_width: header_width.max(MIN_COLUMN_WIDTH),
                right_align: !rows.is_empty() && cells().all(is_numeric),
            }
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut columns, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&columns)
        .map(|(header, column)| pad(&truncate(header, column.width), column.width, false))
        .collect::<Vec<_>>()
        .join(GAP);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(header_line.chars().count()));

    for row in rows {
        let line = columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let text = truncate(cell(row, index), column.width);
                let padded = pad(&text, column.width, column.right_align);
                if options.color {
                    paint(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("-", String::as_str)
}

/// Narrow the widest columns one character at a time until the table fits or
/// every column is at its minimum.
fn shrink_to_fit(columns: &mut [Column], max_width: usize) {
    let gaps = columns.len().saturating_sub(1) * GAP.len();
    let mut total: usize = columns.iter().map(|c| c.width).sum::<usize>() + gaps;

    while total > max_width {
        let Some(widest) = columns
            .iter_mut()
            .filter(|c| c.width > c.min_width)
            .max_by_key(|c| c.width)
        else {
            break;
        };
        widest.width -= 1;
        total -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Color boolean cells; padding stays outside the escape codes.
fn paint(text: &str, padded: String) -> String {
    let code = match text {
        "TRUE" => "33",
        "FALSE" => "2",
        _ => return padded,
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}
