//! Bottom status bar — panel hints, feed provenance, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1:Detalle 2:Ranking 3:Filtros 4:Ayuda",
        theme::muted(),
    ));

    let hash = app.store.feed_hash();
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!(
            "feed {} · {}",
            &hash[..hash.len().min(12)],
            app.store.fetched_at().format("%d/%m/%Y %H:%M"),
        ),
        theme::muted(),
    ));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
