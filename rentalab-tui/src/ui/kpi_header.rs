//! Executive KPI row — escandallos analyzed, mean and peak profitability.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::format;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    metric(
        f,
        chunks[0],
        "Escandallos Analizados",
        format!("{}", app.kpis.analizados),
        theme::accent_bold(),
    );
    metric(
        f,
        chunks[1],
        "Rentabilidad Media",
        format::eur3(app.kpis.media),
        theme::pnl(app.kpis.media),
    );
    metric(
        f,
        chunks[2],
        "Rentabilidad Máxima",
        format::eur3(app.kpis.maxima),
        theme::pnl(app.kpis.maxima),
    );
    metric(
        f,
        chunks[3],
        "Estado General",
        "Simulación ON".to_string(),
        theme::emerald(),
    );
}

fn metric(f: &mut Frame, area: Rect, label: &str, value: String, value_style: ratatui::style::Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(label, theme::muted())),
        Line::from(Span::styled(value, value_style)),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
