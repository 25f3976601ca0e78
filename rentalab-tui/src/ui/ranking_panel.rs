//! Panel 2 — Ranking & Simulación: groups ranked by total allocated value,
//! with the editable `Precio EXW` column.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::format;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.board.is_empty() {
        let msg = if app.filtered.is_empty() {
            "No hay datos que coincidan con los filtros."
        } else {
            "El feed no trae las columnas de cantidad/coste/precio: nada que simular."
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(msg, theme::warning()))),
            area,
        );
        return;
    }

    let header = Row::new(
        [
            "Pos", "KPI", "Cliente", "Fecha", "Cód", "Artículo Principal", "%/CP",
            "Precio EXW", "Rentab. Total",
        ]
        .iter()
        .map(|h| Cell::from(*h).style(theme::accent_bold())),
    )
    .height(1);

    let rows = app.board.entries.iter().enumerate().map(|(i, entry)| {
        let base = if i == app.ranking_cursor {
            theme::selected_row()
        } else {
            theme::text()
        };

        let cells = vec![
            Cell::from(format!("{}º", entry.position)),
            Cell::from(entry.tier.label()).style(theme::tier(entry.tier)),
            Cell::from(entry.cliente.clone()),
            Cell::from(entry.fecha.clone()),
            Cell::from(entry.codigo.clone()),
            Cell::from(entry.nombre.clone()),
            Cell::from(format!("{:.2} %", entry.share_pct)),
            Cell::from(format::eur3(entry.precio_exw)).style(theme::emerald()),
            Cell::from(format::eur4(entry.total_value)).style(theme::pnl(entry.total_value)),
        ];
        Row::new(cells).style(base).height(1)
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Min(18),
        Constraint::Length(8),
        Constraint::Length(11),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, area);

    // Help text at the bottom edge.
    let help_y = area.y + area.height.saturating_sub(1);
    let help_area = Rect {
        x: area.x,
        y: help_y,
        width: area.width,
        height: 1,
    };
    let help = Line::from(vec![
        Span::styled("j/k: ", theme::muted()),
        Span::styled("Seleccionar", theme::text()),
        Span::styled(" │ ", theme::muted()),
        Span::styled("Enter/e: ", theme::muted()),
        Span::styled("Editar Precio EXW", theme::emerald()),
        Span::styled(" │ ", theme::muted()),
        Span::styled("R: ", theme::muted()),
        Span::styled("Resetear datos", theme::text()),
    ]);
    f.render_widget(Paragraph::new(help), help_area);
}
