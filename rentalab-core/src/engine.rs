//! Allocation engine — per-line share of group quantity and allocated value.
//!
//! The computation reads base inputs only (quantity, costs, price), never its
//! own prior output, so re-running it on an already-derived table reproduces
//! identical values.

use std::collections::HashMap;

use crate::domain::{Derived, EscandalloTable};

/// Recompute every row's derived allocation values in place.
///
/// Per group: total quantity, each line's share of it (0.0 when the total is
/// 0, avoiding division by zero), and the allocated value
/// `(precio_exw − coste_congelacion − coste_despiece) × share`.
///
/// When the source feed lacked any of the quantity/cost/price columns the
/// computation is inapplicable: derived values are cleared instead of
/// invented, and callers are expected to check for their presence.
pub fn recalculate(table: &mut EscandalloTable) {
    if !table.columns.has_allocation_inputs() {
        for row in &mut table.rows {
            row.derived = None;
        }
        return;
    }

    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in &table.rows {
        *totals.entry(row.escandallo.clone()).or_insert(0.0) += row.cantidad_kg;
    }

    for row in &mut table.rows {
        let total = totals.get(&row.escandallo).copied().unwrap_or(0.0);
        let share = if total > 0.0 {
            row.cantidad_kg / total
        } else {
            0.0
        };
        let precio_escandallo =
            (row.precio_exw - row.coste_congelacion - row.coste_despiece) * share;
        row.derived = Some(Derived {
            total_kg_grupo: total,
            share,
            precio_escandallo,
        });
    }
}
