//! Panel 4 — Ayuda: keyboard reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), theme::accent()),
            Span::styled(desc.to_string(), theme::text()),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Navegación", theme::accent_bold())),
        entry("1-4", "Ir al panel (Detalle, Ranking, Filtros, Ayuda)"),
        entry("Tab / S-Tab", "Panel siguiente / anterior"),
        entry("j/k, ↓/↑", "Desplazarse"),
        entry("q", "Salir"),
        Line::from(""),
        Line::from(Span::styled("Simulación", theme::accent_bold())),
        entry("Enter / e", "Editar el Precio EXW de la fila seleccionada (Ranking)"),
        entry("Esc", "Cancelar la edición"),
        entry("R", "Resetear: recargar la hoja y descartar las ediciones"),
        Line::from(""),
        Line::from(Span::styled("Filtros", theme::accent_bold())),
        entry("h/l, ←/→", "Cambiar de sección"),
        entry("Espacio", "Marcar / desmarcar"),
        entry("c", "Limpiar todos los filtros"),
        Line::from(""),
        Line::from(Span::styled(
            "La tabla se recalcula por completo tras cada edición; los",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "umbrales Alta/Media/Baja se recalculan sobre el conjunto filtrado.",
            theme::muted(),
        )),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
