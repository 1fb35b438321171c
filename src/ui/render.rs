use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Model;
use crate::editor::RunDirection;
use crate::grid::Cell;

use super::viewport::{OverviewWindow, ZoomWindow};
use super::{STATUS_PANEL_HEIGHT, ZOOM_CELL_WIDTH, overlays, status, style};

/// Split the screen into the zoom column and the right-hand column.
pub fn split_main_columns(area: Rect, lookaround: usize) -> std::rc::Rc<[Rect]> {
    let side = u16::try_from(lookaround * 2 + 1).unwrap_or(u16::MAX);
    let zoom_width = side
        .saturating_mul(ZOOM_CELL_WIDTH)
        .saturating_add(2)
        .min(area.width.saturating_mul(2) / 3);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(zoom_width), Constraint::Min(0)])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(footer_rows)])
        .split(area);
    let (main, footer) = (rows[0], rows[1]);

    let columns = split_main_columns(main, model.lookaround);
    let zoom = render_zoom(model, frame, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATUS_PANEL_HEIGHT),
            Constraint::Min(0),
        ])
        .split(columns[1]);
    render_paint_panel(model, frame, right[0]);
    render_overview(model, frame, right[1], zoom);

    if toast_active {
        let bars = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(footer);
        status::render_toast_bar(model, frame, bars[0]);
        status::render_status_bar(model, frame, bars[1]);
    } else {
        status::render_status_bar(model, frame, footer);
    }

    if model.help_visible {
        overlays::render_help_overlay(frame, area);
    }
}

/// Draw the zoom panel and return the window it shows.
fn render_zoom(model: &Model, frame: &mut Frame, area: Rect) -> ZoomWindow {
    let block = Block::default()
        .title("Zoom")
        .borders(Borders::ALL)
        .border_style(style::panel_border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let window = ZoomWindow::fit(model.lookaround, inner.width, inner.height, ZOOM_CELL_WIDTH);
    let cursor = model.editor.cursor();
    let centre = window.radius();
    let blank = " ".repeat(ZOOM_CELL_WIDTH as usize);

    let lines: Vec<Line> = window
        .rows(model.editor.grid(), cursor)
        .into_iter()
        .enumerate()
        .map(|(dy, row)| {
            let spans: Vec<Span> = row
                .into_iter()
                .enumerate()
                .map(|(dx, cell)| match cell {
                    Some(cell) if dy == centre && dx == centre => {
                        Span::styled("[]", style::cursor_style(cell))
                    }
                    Some(cell) => {
                        Span::styled(blank.clone(), Style::default().bg(style::cell_color(cell)))
                    }
                    None => Span::raw(blank.clone()),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
    window
}

fn render_paint_panel(model: &Model, frame: &mut Frame, area: Rect) {
    let editor = &model.editor;
    let grid = editor.grid();
    let cursor = editor.cursor();
    let label = style::label_style();

    let color_name = match editor.color() {
        crate::editor::PaintColor::Black => "black",
        crate::editor::PaintColor::White => "white",
    };
    let direction = match editor.direction() {
        RunDirection::Rightward => "\u{2192} rightward",
        RunDirection::Leftward => "\u{2190} leftward",
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Color   ", label),
            Span::styled("    ", Style::default().bg(style::paint_color(editor.color()))),
            Span::raw(format!(" {color_name}")),
        ]),
        Line::from(vec![
            Span::styled("Run     ", label),
            Span::raw(direction),
        ]),
        Line::from(vec![
            Span::styled("Cursor  ", label),
            Span::raw(format!(
                "row {}, col {}  [{}]",
                cursor.row,
                cursor.col,
                cell_name(editor.current_cell())
            )),
        ]),
        Line::from(vec![
            Span::styled("Grid    ", label),
            Span::raw(format!("{}\u{00d7}{}", grid.width(), grid.height())),
        ]),
        Line::from(vec![
            Span::styled("Cells   ", label),
            Span::raw(format!(
                "{} black \u{00b7} {} white \u{00b7} {} unset",
                grid.count(Cell::Black),
                grid.count(Cell::White),
                grid.count(Cell::Unset)
            )),
        ]),
    ];

    let block = Block::default()
        .title("Paint")
        .borders(Borders::ALL)
        .border_style(style::panel_border(false));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_overview(model: &Model, frame: &mut Frame, area: Rect, zoom: ZoomWindow) {
    let block = Block::default()
        .title("Overview")
        .borders(Borders::ALL)
        .border_style(style::panel_border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = model.editor.grid();
    let cursor = model.editor.cursor();
    let window = OverviewWindow::new(grid, cursor, inner.width, inner.height);

    // Cursor first, then the zoom outline, then the cell itself
    let color_at = |row: usize, col: usize| -> Option<Color> {
        let cell = grid.get(row, col).ok()?;
        if row == cursor.row && col == cursor.col {
            Some(style::CURSOR)
        } else if zoom.outlines(cursor, row, col) {
            Some(style::ZOOM_FRAME)
        } else {
            Some(style::cell_color(cell))
        }
    };

    let lines: Vec<Line> = (0..window.rows.div_ceil(2))
        .map(|pair| {
            let top_row = window.row_origin + pair * 2;
            let spans: Vec<Span> = (window.col_origin..window.col_origin + window.cols)
                .map(|col| {
                    let top = color_at(top_row, col).unwrap_or(Color::Reset);
                    let bottom = if top_row + 1 < window.row_origin + window.rows {
                        color_at(top_row + 1, col).unwrap_or(Color::Reset)
                    } else {
                        Color::Reset
                    };
                    Span::styled("\u{2580}", Style::default().fg(top).bg(bottom))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

const fn cell_name(cell: Cell) -> &'static str {
    match cell {
        Cell::Black => "black",
        Cell::White => "white",
        Cell::Unset => "unset",
    }
}
