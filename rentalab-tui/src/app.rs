//! Application state — single-owner, main-thread only.
//!
//! Every interaction (filter change, price edit, reset) triggers one full
//! recomputation pass over the in-memory table via [`AppState::refresh`].
//! There is no background work and no concurrent mutation: the store is
//! exclusively owned by this session.

use rentalab_core::data::FeedClient;
use rentalab_core::filter::{self, FilterSelection};
use rentalab_core::ranking::{self, Kpis, RankingBoard};
use rentalab_core::{AppConfig, EscandalloTable, SessionStore};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Detail,
    Ranking,
    Filters,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Detail => 0,
            Panel::Ranking => 1,
            Panel::Filters => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Detail),
            1 => Some(Panel::Ranking),
            2 => Some(Panel::Filters),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Detail => "Detalle",
            Panel::Ranking => "Ranking",
            Panel::Filters => "Filtros",
            Panel::Help => "Ayuda",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Modal input state.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    /// Editing `Precio EXW` for one ranking entry.
    EditPrice { entry: usize, input: String },
}

/// Filter panel sections, in display order.
pub const FILTER_SECTIONS: usize = 3;

pub struct AppState {
    pub store: SessionStore,
    pub config: AppConfig,
    pub client: FeedClient,

    pub running: bool,
    pub active_panel: Panel,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,

    pub filters: FilterSelection,
    /// View state derived from `store` + `filters`; rebuilt by `refresh`.
    pub filtered: EscandalloTable,
    pub board: RankingBoard,
    pub kpis: Kpis,
    /// `(group id, display label)` for the filtered set, detail-panel order.
    pub labels: Vec<(String, String)>,

    pub detail_scroll: usize,
    pub ranking_cursor: usize,
    /// 0 = familia, 1 = formato, 2 = escandallo.
    pub filter_section: usize,
    pub filter_cursor: usize,
}

impl AppState {
    pub fn new(store: SessionStore, config: AppConfig, client: FeedClient) -> Self {
        let mut app = Self {
            store,
            config,
            client,
            running: true,
            active_panel: Panel::Detail,
            overlay: Overlay::None,
            status_message: None,
            filters: FilterSelection::default(),
            filtered: EscandalloTable::default(),
            board: RankingBoard::default(),
            kpis: Kpis::default(),
            labels: Vec::new(),
            detail_scroll: 0,
            ranking_cursor: 0,
            filter_section: 0,
            filter_cursor: 0,
        };
        app.refresh();
        app
    }

    /// One full recomputation pass: filter → rank → tier → KPIs.
    pub fn refresh(&mut self) {
        self.filtered = self.filters.apply(self.store.table());
        self.board = ranking::rank(&self.filtered);
        self.kpis = Kpis::from_board(&self.board);
        self.labels = ranking::group_labels(&self.filtered);

        let entries = self.board.entries.len();
        if self.ranking_cursor >= entries {
            self.ranking_cursor = entries.saturating_sub(1);
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    /// Open the price editor for the ranking entry under the cursor,
    /// prefilled with the current price.
    pub fn open_price_editor(&mut self) {
        if self.board.is_empty() {
            return;
        }
        let entry = self.ranking_cursor.min(self.board.entries.len() - 1);
        let input = format!("{:.3}", self.board.entries[entry].precio_exw);
        self.overlay = Overlay::EditPrice { entry, input };
    }

    /// Commit the editor input: write back through the store and rerun the
    /// whole derivation. Invalid input keeps the editor open.
    pub fn commit_price_edit(&mut self) {
        let Overlay::EditPrice { entry, input } = self.overlay.clone() else {
            return;
        };
        let Some(ranked) = self.board.entries.get(entry) else {
            self.overlay = Overlay::None;
            return;
        };

        let Some(precio) = parse_price_input(&input) else {
            self.set_error(format!("Precio no válido: '{input}'"));
            return;
        };

        let escandallo = ranked.escandallo.clone();
        let codigo = ranked.codigo.clone();
        let touched = self.store.apply_edit(&escandallo, &codigo, precio);
        self.overlay = Overlay::None;

        if touched == 0 {
            self.set_warning(format!("Sin filas para {escandallo} / {codigo}"));
            return;
        }

        self.refresh();
        // Follow the edited group to its new position.
        if let Some(pos) = self
            .board
            .entries
            .iter()
            .position(|e| e.escandallo == escandallo)
        {
            self.ranking_cursor = pos;
        }
        self.set_status(format!(
            "Precio EXW de {escandallo} actualizado a {precio:.3} €"
        ));
    }

    /// The reset button: refetch the feed and rebuild, discarding every edit.
    /// On failure the current table stays untouched.
    pub fn reset_data(&mut self) {
        let url = self.config.feed.url.clone();
        match self.store.reload(&self.client, &url) {
            Ok(()) => {
                self.refresh();
                self.set_status("Datos recargados desde la hoja publicada");
            }
            Err(e) => self.set_error(format!("Error al recargar: {e}")),
        }
    }

    /// Rows of the currently active filter section.
    pub fn filter_rows(&self) -> Vec<(String, String, bool)> {
        self.filter_rows_for(self.filter_section)
    }

    /// `(value, display label, selected)` rows for one filter section.
    pub fn filter_rows_for(&self, section: usize) -> Vec<(String, String, bool)> {
        match section {
            0 => filter::familia_options(self.store.table())
                .into_iter()
                .map(|v| {
                    let on = self.filters.familias.contains(&v);
                    (v.clone(), v, on)
                })
                .collect(),
            1 => filter::formato_options(self.store.table())
                .into_iter()
                .map(|v| {
                    let on = self.filters.formatos.contains(&v);
                    (v.clone(), v, on)
                })
                .collect(),
            _ => filter::escandallo_options(self.store.table(), &self.filters)
                .into_iter()
                .map(|(id, label)| {
                    let on = self.filters.escandallos.contains(&id);
                    (id, label, on)
                })
                .collect(),
        }
    }

    /// Toggle the filter value under the cursor and recompute.
    pub fn toggle_filter_at_cursor(&mut self) {
        let rows = self.filter_rows();
        let Some((id, _, selected)) = rows.get(self.filter_cursor).cloned() else {
            return;
        };
        let set = match self.filter_section {
            0 => &mut self.filters.familias,
            1 => &mut self.filters.formatos,
            _ => &mut self.filters.escandallos,
        };
        if selected {
            set.remove(&id);
        } else {
            set.insert(id);
        }
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.filter_cursor = 0;
        self.refresh();
        self.set_status("Filtros reiniciados");
    }
}

/// Parse editor input. Accepts both `12.5` and `12,5`; anything else is
/// rejected — the feed-side "malformed → 0.0" leniency applies to ingestion
/// only, a mistyped edit must not silently zero a price.
pub fn parse_price_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentalab_core::data::FeedSnapshot;

    const FEED: &str = "\
Escandallo,Código,Nombre,Cantidad(kg),Coste_despiece,Coste_congelación,Precio EXW,Tipo,Familia
E1,1,Lomo,60,0,0,\"5,0\",Principal,Porcino
E1,2,Recorte,40,0,0,\"2,0\",Resto,Porcino
E2,3,Solomillo,10,0,0,\"9,0\",Principal,Vacuno
";

    fn app() -> AppState {
        let store =
            SessionStore::from_snapshot(FeedSnapshot::from_bytes(FEED.as_bytes().to_vec()))
                .unwrap();
        AppState::new(store, AppConfig::default(), FeedClient::default())
    }

    #[test]
    fn panel_cycle_wraps() {
        assert_eq!(Panel::Detail.next(), Panel::Ranking);
        assert_eq!(Panel::Help.next(), Panel::Detail);
        assert_eq!(Panel::Detail.prev(), Panel::Help);
    }

    #[test]
    fn new_app_is_fully_derived() {
        let app = app();
        assert_eq!(app.board.entries.len(), 2);
        assert_eq!(app.kpis.analizados, 2);
        assert_eq!(app.labels.len(), 2);
    }

    #[test]
    fn toggle_filter_narrows_the_board() {
        let mut app = app();
        app.filter_section = 0;
        app.filter_cursor = 0; // "Porcino" sorts first
        app.toggle_filter_at_cursor();
        assert_eq!(app.board.entries.len(), 1);
        assert_eq!(app.board.entries[0].escandallo, "E1");

        app.toggle_filter_at_cursor();
        assert_eq!(app.board.entries.len(), 2);
    }

    #[test]
    fn price_edit_commits_and_reranks() {
        let mut app = app();
        // E2 leads (9.0 × 1.0 = 9.0 vs E1's 5×0.6 + 2×0.4 = 3.8).
        assert_eq!(app.board.entries[0].escandallo, "E2");

        // Edit E1's primary price upward through the overlay.
        app.ranking_cursor = 1;
        app.open_price_editor();
        assert!(matches!(app.overlay, Overlay::EditPrice { .. }));
        app.overlay = Overlay::EditPrice {
            entry: 1,
            input: "20,0".into(),
        };
        app.commit_price_edit();

        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.board.entries[0].escandallo, "E1");
        assert_eq!(app.ranking_cursor, 0);
    }

    #[test]
    fn invalid_edit_input_keeps_the_editor_open() {
        let mut app = app();
        app.open_price_editor();
        app.overlay = Overlay::EditPrice {
            entry: 0,
            input: "no es un precio".into(),
        };
        app.commit_price_edit();
        assert!(matches!(app.overlay, Overlay::EditPrice { .. }));
        assert!(matches!(
            app.status_message,
            Some((_, StatusLevel::Error))
        ));
    }

    #[test]
    fn price_input_accepts_both_decimal_separators() {
        assert_eq!(parse_price_input("12.5"), Some(12.5));
        assert_eq!(parse_price_input("12,5"), Some(12.5));
        assert_eq!(parse_price_input(" 3 "), Some(3.0));
        assert_eq!(parse_price_input(""), None);
        assert_eq!(parse_price_input("abc"), None);
    }

    #[test]
    fn clear_filters_restores_the_full_board() {
        let mut app = app();
        app.filters.familias.insert("Vacuno".into());
        app.refresh();
        assert_eq!(app.board.entries.len(), 1);
        app.clear_filters();
        assert_eq!(app.board.entries.len(), 2);
        assert!(app.filters.is_empty());
    }
}
