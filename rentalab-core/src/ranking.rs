//! Ranking & tiering — group totals sorted descending, percentile-based tiers,
//! primary-line consolidation for the simulation view.

use crate::domain::{EscandalloTable, LineItem};

/// Qualitative profitability tier, displayed as the KPI traffic light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::High => "Alta",
            Tier::Medium => "Media",
            Tier::Low => "Baja",
        }
    }
}

/// One ranked group, consolidated onto its primary line.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    /// 1-based position after sorting by total value, descending.
    pub position: usize,
    pub tier: Tier,
    pub escandallo: String,
    /// Código of the first primary line.
    pub codigo: String,
    /// Nombre of the first primary line (the "artículo principal").
    pub nombre: String,
    pub cliente: String,
    pub fecha: String,
    /// Summed share of all primary lines, as a percentage.
    pub share_pct: f64,
    /// Editable price of the first primary line.
    pub precio_exw: f64,
    /// Sum of `precio_escandallo` over the whole group.
    pub total_value: f64,
}

/// The ranked, tiered view over the current (filtered) table.
///
/// Empty when the table is empty or when allocation output is absent —
/// ranking without derived values would be meaningless, so callers check
/// `is_empty` rather than getting an invented order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankingBoard {
    pub entries: Vec<RankingEntry>,
    /// 33rd percentile of the totals across this set.
    pub q33: f64,
    /// 66th percentile of the totals across this set.
    pub q66: f64,
}

impl RankingBoard {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Headline figures for the KPI row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kpis {
    pub analizados: usize,
    pub media: f64,
    pub maxima: f64,
}

impl Kpis {
    pub fn from_board(board: &RankingBoard) -> Self {
        if board.is_empty() {
            return Self::default();
        }
        let totals: Vec<f64> = board.entries.iter().map(|e| e.total_value).collect();
        let sum: f64 = totals.iter().sum();
        let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            analizados: totals.len(),
            media: sum / totals.len() as f64,
            maxima: max,
        }
    }
}

/// Rank groups by total allocated value, descending.
///
/// Tier thresholds are the 33rd/66th percentiles of the totals across the
/// given table, so the same group can change tier as filters change. Ties on
/// a threshold resolve upward (the ≥ rule).
pub fn rank(table: &EscandalloTable) -> RankingBoard {
    if table.is_empty() || table.rows.iter().any(|r| r.derived.is_none()) {
        return RankingBoard::default();
    }

    let mut entries: Vec<RankingEntry> = Vec::new();
    for id in table.group_ids() {
        let rows = table.group_rows(id);
        let total: f64 = rows
            .iter()
            .filter_map(|r| r.derived)
            .map(|d| d.precio_escandallo)
            .sum();

        let primary = primary_rows(&rows);
        let share_pct: f64 = primary
            .iter()
            .filter_map(|r| r.derived)
            .map(|d| d.share)
            .sum::<f64>()
            * 100.0;
        let first = primary[0];

        entries.push(RankingEntry {
            position: 0,
            tier: Tier::Low,
            escandallo: id.to_string(),
            codigo: first.codigo.clone(),
            nombre: first.nombre.clone(),
            cliente: first.cliente.clone(),
            fecha: first.fecha.clone(),
            share_pct,
            precio_exw: first.precio_exw,
            total_value: total,
        });
    }

    entries.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));

    let totals: Vec<f64> = entries.iter().map(|e| e.total_value).collect();
    let q33 = percentile(&totals, 0.33);
    let q66 = percentile(&totals, 0.66);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.position = i + 1;
        entry.tier = if entry.total_value >= q66 {
            Tier::High
        } else if entry.total_value >= q33 {
            Tier::Medium
        } else {
            Tier::Low
        };
    }

    RankingBoard { entries, q33, q66 }
}

/// "escandallo | código | nombre" display label per group, from the primary
/// line, in first-appearance order.
pub fn group_labels(table: &EscandalloTable) -> Vec<(String, String)> {
    table
        .group_ids()
        .into_iter()
        .map(|id| {
            let rows = table.group_rows(id);
            let first = primary_rows(&rows)[0];
            (
                id.to_string(),
                format!("{} | {} | {}", id, first.codigo, first.nombre),
            )
        })
        .collect()
}

/// Rows flagged as primary ("principal" in the role marker, case-insensitive).
/// A group with no marked row falls back to its first row, so every group
/// always has a display line.
fn primary_rows<'a>(rows: &[&'a LineItem]) -> Vec<&'a LineItem> {
    let marked: Vec<&LineItem> = rows
        .iter()
        .copied()
        .filter(|r| r.tipo.to_lowercase().contains("principal"))
        .collect();
    if marked.is_empty() {
        rows.first().copied().into_iter().collect()
    } else {
        marked
    }
}

/// Linear-interpolation percentile over the values, `q` in `[0, 1]`.
pub fn percentile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnPresence, Derived, LineItem};

    fn item(escandallo: &str, codigo: &str, tipo: &str, share: f64, value: f64) -> LineItem {
        LineItem {
            escandallo: escandallo.into(),
            codigo: codigo.into(),
            nombre: format!("item {codigo}"),
            cantidad_kg: 0.0,
            coste_despiece: 0.0,
            coste_congelacion: 0.0,
            precio_exw: 1.0,
            tipo: tipo.into(),
            cliente: String::new(),
            fecha: String::new(),
            fecha_parsed: None,
            familia: String::new(),
            formato: String::new(),
            derived: Some(Derived {
                total_kg_grupo: 1.0,
                share,
                precio_escandallo: value,
            }),
        }
    }

    fn single_line_table(values: &[f64]) -> EscandalloTable {
        let rows = values
            .iter()
            .enumerate()
            .map(|(i, &v)| item(&format!("E{i}"), &format!("{i}"), "", 1.0, v))
            .collect();
        EscandalloTable::new(rows, ColumnPresence::default())
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert!((percentile(&values, 0.33) - 2.65).abs() < 1e-12);
        assert!((percentile(&values, 0.66) - 4.3).abs() < 1e-12);
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 1.0), 6.0);
        assert_eq!(percentile(&[], 0.5), 0.0);
    }

    #[test]
    fn six_groups_split_into_thirds() {
        let board = rank(&single_line_table(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));

        let tier_of = |value: f64| {
            board
                .entries
                .iter()
                .find(|e| e.total_value == value)
                .unwrap()
                .tier
        };
        assert_eq!(tier_of(6.0), Tier::High);
        assert_eq!(tier_of(5.0), Tier::High);
        assert_eq!(tier_of(4.0), Tier::Medium);
        assert_eq!(tier_of(3.0), Tier::Medium);
        assert_eq!(tier_of(2.0), Tier::Low);
        assert_eq!(tier_of(1.0), Tier::Low);
    }

    #[test]
    fn ties_resolve_to_the_higher_tier() {
        let board = rank(&single_line_table(&[2.0, 2.0, 2.0]));
        assert!(board.entries.iter().all(|e| e.tier == Tier::High));
    }

    #[test]
    fn positions_follow_descending_total() {
        let board = rank(&single_line_table(&[1.0, 3.0, 2.0]));
        let order: Vec<f64> = board.entries.iter().map(|e| e.total_value).collect();
        assert_eq!(order, vec![3.0, 2.0, 1.0]);
        let positions: Vec<usize> = board.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn primary_lines_consolidate_shares() {
        let table = EscandalloTable::new(
            vec![
                item("E1", "A", "Principal", 0.4, 1.0),
                item("E1", "B", "principal corte", 0.2, 1.0),
                item("E1", "C", "resto", 0.4, 1.0),
            ],
            ColumnPresence::default(),
        );
        let board = rank(&table);
        let entry = &board.entries[0];
        assert_eq!(entry.codigo, "A");
        assert!((entry.share_pct - 60.0).abs() < 1e-9);
        assert_eq!(entry.total_value, 3.0);
    }

    #[test]
    fn unmarked_groups_fall_back_to_first_row() {
        let table = EscandalloTable::new(
            vec![item("E1", "X", "", 0.7, 2.0), item("E1", "Y", "", 0.3, 1.0)],
            ColumnPresence::default(),
        );
        let board = rank(&table);
        assert_eq!(board.entries[0].codigo, "X");
        assert!((board.entries[0].share_pct - 70.0).abs() < 1e-9);
    }

    #[test]
    fn labels_use_the_primary_line() {
        let table = EscandalloTable::new(
            vec![
                item("E1", "7", "resto", 0.5, 1.0),
                item("E1", "9", "Principal", 0.5, 1.0),
            ],
            ColumnPresence::default(),
        );
        let labels = group_labels(&table);
        assert_eq!(labels, vec![("E1".to_string(), "E1 | 9 | item 9".to_string())]);
    }

    #[test]
    fn missing_derived_yields_an_empty_board() {
        let mut table = single_line_table(&[1.0, 2.0]);
        table.rows[1].derived = None;
        assert!(rank(&table).is_empty());
        assert!(rank(&EscandalloTable::default()).is_empty());
    }

    #[test]
    fn kpis_summarize_the_board() {
        let board = rank(&single_line_table(&[1.0, 2.0, 6.0]));
        let kpis = Kpis::from_board(&board);
        assert_eq!(kpis.analizados, 3);
        assert!((kpis.media - 3.0).abs() < 1e-12);
        assert_eq!(kpis.maxima, 6.0);
        assert_eq!(Kpis::from_board(&RankingBoard::default()).analizados, 0);
    }
}
