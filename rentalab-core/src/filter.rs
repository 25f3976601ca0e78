//! Multiselect filters over familia, formato, and specific escandallos.
//!
//! An empty selection for a dimension means "no restriction", mirroring the
//! sidebar of the dashboard: nothing ticked shows everything.

use std::collections::BTreeSet;

use crate::domain::{EscandalloTable, LineItem};
use crate::ranking;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub familias: BTreeSet<String>,
    pub formatos: BTreeSet<String>,
    /// Selected group ids (displayed by label, filtered by id).
    pub escandallos: BTreeSet<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.familias.is_empty() && self.formatos.is_empty() && self.escandallos.is_empty()
    }

    pub fn clear(&mut self) {
        self.familias.clear();
        self.formatos.clear();
        self.escandallos.clear();
    }

    fn matches(&self, row: &LineItem) -> bool {
        (self.familias.is_empty() || self.familias.contains(&row.familia))
            && (self.formatos.is_empty() || self.formatos.contains(&row.formato))
            && (self.escandallos.is_empty() || self.escandallos.contains(&row.escandallo))
    }

    /// The matching subset, column presence preserved. An empty result is a
    /// valid, non-fatal state — the UI shows "no matching data".
    pub fn apply(&self, table: &EscandalloTable) -> EscandalloTable {
        EscandalloTable::new(
            table.rows.iter().filter(|r| self.matches(r)).cloned().collect(),
            table.columns,
        )
    }
}

/// Sorted unique familia values across the whole table.
pub fn familia_options(table: &EscandalloTable) -> Vec<String> {
    sorted_unique(table.rows.iter().map(|r| r.familia.clone()))
}

/// Sorted unique formato values across the whole table.
pub fn formato_options(table: &EscandalloTable) -> Vec<String> {
    sorted_unique(table.rows.iter().map(|r| r.formato.clone()))
}

/// `(group id, display label)` options for the escandallo picker, narrowed by
/// the current familia/formato selection and sorted by label.
pub fn escandallo_options(
    table: &EscandalloTable,
    selection: &FilterSelection,
) -> Vec<(String, String)> {
    let narrowed = FilterSelection {
        familias: selection.familias.clone(),
        formatos: selection.formatos.clone(),
        escandallos: BTreeSet::new(),
    };
    let subset = narrowed.apply(table);
    let mut labels = ranking::group_labels(&subset);
    labels.sort_by(|a, b| a.1.cmp(&b.1));
    labels
}

fn sorted_unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let set: BTreeSet<String> = values.collect();
    set.into_iter().collect()
}
