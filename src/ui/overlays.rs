use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Cursor",
        &[
            ("Arrows", "Move one cell"),
            ("Home", "Top-left, run rightward"),
        ],
    ),
    (
        "Painting",
        &[
            ("0-9", "Paint a run, then swap color"),
            ("r / R", "Reverse run direction"),
            ("x / X", "Swap paint color"),
            ("t / T", "Set cell black"),
            ("f / F", "Set cell white"),
            ("Backspace/Del", "Clear cell"),
        ],
    ),
    (
        "File",
        &[
            ("s / Ctrl-s", "Save"),
            ("e / E", "Export PNG"),
            ("F5", "Reload from disk"),
        ],
    ),
    (
        "Other",
        &[
            ("? / F1", "Toggle help"),
            ("Ctrl-l", "Redraw"),
            ("q / Esc / Ctrl-c", "Quit"),
        ],
    ),
];

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();
    for (idx, (title, keys)) in HELP_SECTIONS.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(*title, section_style));
        for (key, action) in *keys {
            lines.push(Line::raw(format!("  {key:<18}{action}")));
        }
    }

    // Content plus footer, border and padding
    #[allow(clippy::cast_possible_truncation)]
    let needed_rows = lines.len() as u16 + 5;
    let popup = centered_popup_rect(48, needed_rows, area);

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );
    let content_height = inner.height.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x, inner.y, inner.width, content_height),
    );

    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    let footer = Line::styled("any key closes", dim_style);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
