//! Corporate theme tokens — dark navy surfaces with the dashboard's
//! executive palette: bright blue accents, emerald for the editable price
//! column, a red/amber/green traffic light for the profitability tiers.

use ratatui::style::{Color, Modifier, Style};
use rentalab_core::ranking::Tier;

/// Bright corporate blue (focus, highlights).
const ACCENT: Color = Color::Rgb(52, 152, 219);
/// Emerald — the editable `Precio EXW` column.
const EMERALD: Color = Color::Rgb(22, 160, 133);
/// Positive values, "Alta" tier.
const POSITIVE: Color = Color::Rgb(39, 174, 96);
/// Negative values, "Baja" tier, errors.
const NEGATIVE: Color = Color::Rgb(231, 76, 60);
/// Warnings, "Media" tier.
const WARNING: Color = Color::Rgb(243, 156, 18);
/// Secondary text.
const MUTED: Color = Color::Rgb(127, 140, 141);
/// Primary text.
const TEXT: Color = Color::Rgb(236, 240, 241);
/// Dark navy (inactive borders).
const NAVY: Color = Color::Rgb(44, 62, 80);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn emerald() -> Style {
    Style::default().fg(EMERALD).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn text_bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(NAVY)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Traffic-light style for a profitability tier.
pub fn tier(tier: Tier) -> Style {
    let color = match tier {
        Tier::High => POSITIVE,
        Tier::Medium => WARNING,
        Tier::Low => NEGATIVE,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Positive or negative coloring for a monetary value.
pub fn pnl(value: f64) -> Style {
    if value >= 0.0 {
        positive()
    } else {
        negative()
    }
}

/// Highlight for the row under the cursor.
pub fn selected_row() -> Style {
    Style::default()
        .bg(NAVY)
        .fg(TEXT)
        .add_modifier(Modifier::BOLD)
}
