use colored::Colorize;

use crate::{
    cli::output::current_preferences,
    currency::CurrencyFormatter,
    schedules::{Column, ScheduleRow, ScheduleTable},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Alignment {
    Left,
    Right,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Emphasis {
    None,
    Bold,
    Income,
}

/// Unstyled cell text; emphasis is applied after the text is fitted.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Cell {
    text: String,
    emphasis: Emphasis,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::None,
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

fn layout(column: Column) -> (usize, Option<usize>, Alignment) {
    match column {
        Column::Name | Column::Payee | Column::Account => (4, Some(28), Alignment::Left),
        Column::NextDate => (10, None, Alignment::Left),
        Column::Status => (6, None, Alignment::Left),
        Column::Amount => (8, None, Alignment::Right),
        Column::Recurring => (9, None, Alignment::Center),
        Column::Actions => (3, None, Alignment::Center),
    }
}

fn column_widths(columns: &[Column], rows: &[Vec<Cell>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let (min_width, max_width, _) = layout(*column);
            let widest = rows
                .iter()
                .filter_map(|row| row.get(idx).map(Cell::width))
                .fold(column.header().chars().count().max(min_width), usize::max);
            max_width.map_or(widest, |max| widest.min(max))
        })
        .collect()
}

fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut fitted: String = text.chars().take(width - 1).collect();
    fitted.push('…');
    fitted
}

fn render_cell(cell: &Cell, width: usize, alignment: Alignment, styled: bool) -> String {
    let fitted = truncate_text(&cell.text, width);
    let remaining = width.saturating_sub(fitted.chars().count());
    let (left, right) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
        Alignment::Center => (remaining / 2, remaining - remaining / 2),
    };
    let body = match cell.emphasis {
        _ if !styled => fitted,
        Emphasis::None => fitted,
        Emphasis::Bold => fitted.bold().to_string(),
        Emphasis::Income => fitted.green().to_string(),
    };
    format!(" {}{}{} ", " ".repeat(left), body, " ".repeat(right))
}

fn render_line(columns: &[Column], cells: &[Cell], widths: &[usize], styled: bool) -> String {
    let empty = Cell::plain("");
    let rendered: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let (_, _, alignment) = layout(*column);
            render_cell(cells.get(idx).unwrap_or(&empty), widths[idx], alignment, styled)
        })
        .collect();
    rendered.join(" ").trim_end().to_string()
}

/// Lays out a derived schedules table as text, one line per row.
pub fn render_schedule_table(
    table: &ScheduleTable,
    currency: &dyn CurrencyFormatter,
    show_completed: bool,
) -> String {
    if table.is_empty() {
        return table.empty_message().to_string();
    }

    let plain = current_preferences().plain_mode;
    let columns = table.columns();
    let rows: Vec<Vec<Cell>> = table
        .rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| cell_for(row, *column, currency, show_completed, plain))
                .collect()
        })
        .collect();
    let widths = column_widths(&columns, &rows);

    let header: Vec<Cell> = columns.iter().map(|c| Cell::plain(c.header())).collect();
    let rule_width = widths.iter().map(|w| w + 2).sum::<usize>() + widths.len().saturating_sub(1);
    let rule = if plain { "-" } else { "─" };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_line(&columns, &header, &widths, !plain));
    lines.push(rule.repeat(rule_width));
    lines.extend(rows.iter().map(|row| render_line(&columns, row, &widths, !plain)));
    lines.join("\n")
}

fn cell_for(
    row: &ScheduleRow,
    column: Column,
    currency: &dyn CurrencyFormatter,
    show_completed: bool,
    plain: bool,
) -> Cell {
    match row {
        ScheduleRow::Subtotal(subtotal) => match column {
            Column::Name => Cell {
                text: subtotal.title.clone(),
                emphasis: Emphasis::Bold,
            },
            Column::Amount => Cell::plain(subtotal.amounts_text(currency)),
            _ => Cell::plain(""),
        },
        ScheduleRow::Schedule(entry) => {
            let display = &entry.display;
            match column {
                Column::Name => Cell::plain(display.name.clone()),
                Column::Payee => Cell::plain(display.payee.clone().unwrap_or_default()),
                Column::Account => Cell::plain(display.account.clone().unwrap_or_default()),
                Column::NextDate => Cell::plain(display.next_date.clone().unwrap_or_default()),
                Column::Status => Cell::plain(
                    display
                        .status
                        .as_ref()
                        .map(|status| status.as_str().to_string())
                        .unwrap_or_default(),
                ),
                Column::Amount => {
                    let text = &display.amount_display.text;
                    Cell {
                        text: if display.amount.is_approx {
                            format!("~ {}", text)
                        } else {
                            text.clone()
                        },
                        emphasis: if display.amount_display.is_income() {
                            Emphasis::Income
                        } else {
                            Emphasis::None
                        },
                    }
                }
                Column::Recurring if display.recurring => {
                    Cell::plain(if plain { "yes" } else { "✓" })
                }
                Column::Recurring => Cell::plain(""),
                Column::Actions => Cell::plain("..."),
            }
        }
        ScheduleRow::ShowCompleted => match column {
            Column::Name if show_completed => Cell::plain("Hide completed schedules"),
            Column::Name => Cell::plain("Show completed schedules"),
            _ => Cell::plain(""),
        },
    }
}
