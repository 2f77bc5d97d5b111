//! Bordered table output for air quality readings.

use std::io::{stdout, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::colors::AsTermColor;
use aqi_core::error::Result;
use aqi_core::report::{ReportRow, TABLE_HEADERS};

/// Widest each column may grow before its text wraps
const MAX_COLUMN_WIDTHS: [usize; 5] = [30, 5, 30, 40, 40];

/// Columns colored by severity: AQI and Level
const SEVERITY_COLUMNS: [usize; 2] = [1, 2];

/// Word-wraps `text` to lines of at most `width` characters.
///
/// Words longer than `width` are split. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(chars[..width].iter().collect());
            chars.drain(..width);
        }

        if chars.is_empty() {
            continue;
        }

        let word: String = chars.into_iter().collect();
        let current_width = current.chars().count();

        if current.is_empty() {
            current = word;
        } else if current_width + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Width of each column: the widest header or cell, capped per column.
pub fn column_widths(rows: &[[String; 5]]) -> [usize; 5] {
    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());

    for cells in rows {
        for (column, cell) in cells.iter().enumerate() {
            let cell_width = cell.chars().count().min(MAX_COLUMN_WIDTHS[column]);
            widths[column] = widths[column].max(cell_width);
        }
    }

    widths
}

fn separator_line(widths: &[usize; 5]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn write_row<W: Write>(
    writer: &mut W,
    cells: &[String; 5],
    widths: &[usize; 5],
    severity_color: Option<Color>,
    is_header: bool,
) -> Result<()> {
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| wrap_text(cell, *width))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    for line in 0..height {
        queue!(writer, Print("|"))?;

        for (column, width) in widths.iter().enumerate() {
            let text = wrapped[column].get(line).map_or("", String::as_str);
            let padded = format!(" {text:<width$} ");

            if is_header {
                queue!(
                    writer,
                    SetAttribute(Attribute::Bold),
                    Print(padded),
                    SetAttribute(Attribute::Reset)
                )?;
            } else if let (true, Some(color)) =
                (SEVERITY_COLUMNS.contains(&column), severity_color)
            {
                queue!(writer, SetForegroundColor(color), Print(padded), ResetColor)?;
            } else {
                queue!(writer, Print(padded))?;
            }

            queue!(writer, Print("|"))?;
        }

        queue!(writer, Print("\n"))?;
    }

    Ok(())
}

/// Renders `rows` as a bordered table with a line between rows.
pub fn render_table<W: Write>(writer: &mut W, rows: &[ReportRow]) -> Result<()> {
    let cells: Vec<[String; 5]> = rows.iter().map(ReportRow::cells).collect();
    let widths = column_widths(&cells);
    let separator = format!("{}\n", separator_line(&widths));

    queue!(writer, Print(&separator))?;
    write_row(writer, &TABLE_HEADERS.map(String::from), &widths, None, true)?;
    queue!(writer, Print(&separator))?;

    for (row, row_cells) in rows.iter().zip(&cells) {
        write_row(
            writer,
            row_cells,
            &widths,
            row.severity.as_crossterm_color(),
            false,
        )?;
        queue!(writer, Print(&separator))?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders `rows` to stdout.
pub fn print_table(rows: &[ReportRow]) -> Result<()> {
    let mut stdout = stdout();
    render_table(&mut stdout, rows)
}
