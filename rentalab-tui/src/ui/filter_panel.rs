//! Panel 3 — Filtros: familia, formato, and escandallo multiselects.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

const SECTION_TITLES: [&str; 3] = ["Familia", "Formato", "Escandallos Específicos"];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    for section in 0..3 {
        let active = app.filter_section == section;
        render_section(f, chunks[section], app, section, active);
    }
}

fn render_section(f: &mut Frame, area: Rect, app: &AppState, section: usize, active: bool) {
    let rows = app.filter_rows_for(section);
    let selected_count = rows.iter().filter(|(_, _, on)| *on).count();

    let title = format!(" {} ({selected_count}) ", SECTION_TITLES[section]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(title)
        .title_style(theme::panel_title(active));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if active {
        lines.push(Line::from(Span::styled(
            "[Espacio] marcar  [h/l] sección  [c] limpiar",
            theme::muted(),
        )));
    } else {
        lines.push(Line::from(""));
    }

    let visible = inner.height.saturating_sub(1) as usize;
    let cursor = if active { app.filter_cursor } else { 0 };
    let start = cursor.saturating_sub(visible.saturating_sub(1));

    for (i, (_, label, on)) in rows.iter().enumerate().skip(start).take(visible) {
        let marker = if *on { "[x] " } else { "[ ] " };
        let style = if active && i == cursor {
            theme::selected_row()
        } else if *on {
            theme::accent()
        } else {
            theme::text()
        };
        lines.push(Line::from(Span::styled(format!("{marker}{label}"), style)));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

