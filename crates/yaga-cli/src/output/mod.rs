use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A response row that has a fixed column layout in table mode.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Render a response in the requested format.
///
/// JSON and raw serialize the whole `value`; table mode shows only `rows`.
pub fn render<T, R>(value: &T, rows: &[R], format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize,
    R: Tabular,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_rows(rows)),
    }
}

/// Print a response in the requested format.
pub fn output<T, R>(value: &T, rows: &[R], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize,
    R: Tabular,
{
    let rendered = render(value, rows, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_rows<R: Tabular>(rows: &[R]) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    let prefs = ui::prefs();
    let cells = rows.iter().map(Tabular::cells).collect::<Vec<_>>();
    table::render_table(
        R::HEADERS,
        &cells,
        table::TableOptions {
            max_width: prefs.term_width,
            color: prefs.table_color,
        },
    )
}

/// Spreadsheet-style boolean cell.
#[must_use]
pub fn flag(value: bool) -> String {
    String::from(if value { "TRUE" } else { "FALSE" })
}
