//! Overlay widgets — the price editor.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::{centered_rect, format};

/// Modal editor for one ranking entry's `Precio EXW`.
pub fn render_edit_price(f: &mut Frame, area: Rect, app: &AppState, entry: usize, input: &str) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::emerald())
        .title(" Precio EXW (Editable) ")
        .title_style(theme::emerald());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(ranked) = app.board.entries.get(entry) else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Escandallo: ", theme::muted()),
            Span::styled(
                format!("{} | {} | {}", ranked.escandallo, ranked.codigo, ranked.nombre),
                theme::text(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Precio actual: ", theme::muted()),
            Span::styled(format::eur3(ranked.precio_exw), theme::text()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Nuevo precio: ", theme::muted()),
            Span::styled(format!("{input}_"), theme::emerald()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] aplicar y recalcular   [Esc] cancelar",
            theme::muted(),
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
