//! Panel 1 — Detalle: one section per escandallo with its line breakdown
//! and a highlighted TOTAL row.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::format;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.filtered.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No hay datos que coincidan con los filtros. Ajusta la selección en el panel Filtros.",
            theme::negative(),
        )));
        f.render_widget(msg, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (escandallo, label) in &app.labels {
        let rows = app.filtered.group_rows(escandallo);
        if rows.is_empty() {
            continue;
        }
        let first = rows[0];

        // Section title + caption.
        lines.push(Line::from(Span::styled(
            format!("▌ {label}"),
            theme::accent_bold(),
        )));
        let mut caption: Vec<Span> = Vec::new();
        if !first.cliente.is_empty() {
            caption.push(Span::styled("Cliente: ", theme::muted()));
            caption.push(Span::styled(first.cliente.clone(), theme::text()));
            caption.push(Span::raw("   "));
        }
        caption.push(Span::styled("Fecha: ", theme::muted()));
        caption.push(Span::styled(
            if first.fecha.is_empty() {
                "-".to_string()
            } else {
                first.fecha.clone()
            },
            theme::text(),
        ));
        lines.push(Line::from(caption));

        // Column header.
        lines.push(Line::from(Span::styled(
            format!(
                "  {:<10} {:<22} {:>10} {:>9} {:>9} {:>9} {:>11} {:>12}",
                "Código", "Nombre", "Cant.", "C. Desp", "C. Cong", "%", "Precio EXW", "P. Escand."
            ),
            theme::muted(),
        )));

        // Item rows.
        let mut total_share = 0.0;
        let mut total_value = 0.0;
        for row in &rows {
            let (share, value) = match row.derived {
                Some(d) => (d.share, d.precio_escandallo),
                None => (0.0, 0.0),
            };
            total_share += share;
            total_value += value;

            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<10} {:<22}", clip(&row.codigo, 10), clip(&row.nombre, 22)),
                    theme::text(),
                ),
                Span::styled(format!(" {:>10}", format::kg(row.cantidad_kg)), theme::text()),
                Span::styled(
                    format!(" {:>9}", format!("{:.3}", row.coste_despiece)),
                    theme::muted(),
                ),
                Span::styled(
                    format!(" {:>9}", format!("{:.3}", row.coste_congelacion)),
                    theme::muted(),
                ),
                Span::styled(format!(" {:>9}", format::pct(share)), theme::text()),
                Span::styled(
                    format!(" {:>11}", format::eur3(row.precio_exw)),
                    theme::emerald(),
                ),
                Span::styled(format!(" {:>12}", format::eur4(value)), theme::pnl(value)),
            ]));
        }

        // TOTAL row.
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10} {:<22}", "", "TOTAL"),
                theme::text_bold(),
            ),
            Span::styled(format!(" {:>10} {:>9} {:>9}", "", "", ""), theme::muted()),
            Span::styled(format!(" {:>9}", format::pct(total_share)), theme::text_bold()),
            Span::styled(format!(" {:>11}", ""), theme::muted()),
            Span::styled(
                format!(" {:>12}", format::eur4(total_value)),
                theme::pnl(total_value),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let total_lines = lines.len();
    let visible = area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible);
    let scroll = app.detail_scroll.min(max_scroll);

    let para = Paragraph::new(lines).scroll((scroll as u16, 0));
    f.render_widget(para, area);
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{clipped}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_shortens_long_names() {
        assert_eq!(clip("Lomo", 10), "Lomo");
        assert_eq!(clip("Solomillo de cerdo ibérico", 10), "Solomillo…");
    }
}
