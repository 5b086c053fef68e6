//! Rendering for the instance table view

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use super::app::App;

/// Render the whole frame: input line, instance table, key hints
pub fn render(frame: &mut Frame, app: &App) {
    let background = Block::default().style(Style::default().bg(app.bg));
    frame.render_widget(background, frame.area());

    let areas = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_input(frame, app, areas[0]);
    render_table(frame, app, areas[1]);
    render_hints(frame, app, areas[2]);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.editing {
        " Compartment ID (editing) "
    } else {
        " Compartment ID "
    };
    let input = Paragraph::new(app.input.as_str())
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("OCID"),
        Cell::from("Shape"),
        Cell::from("Status"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.name.clone()),
                Cell::from(row.id.clone()),
                Cell::from(row.shape.clone()),
                Cell::from(row.status.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(35),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];

    let count = app.rows.len();
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Instances ({count}) "))
                .borders(Borders::ALL),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.editing {
        " Enter/Esc: done editing "
    } else {
        " r: refresh | e: edit compartment id | ↑/↓: scroll | q: quit "
    };
    frame.render_widget(Paragraph::new(hints), area);
}
