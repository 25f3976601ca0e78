//! Domain types — normalized line items, the escandallo table, derived allocation values.

use chrono::NaiveDate;

/// One row of the escandallo feed after normalization.
///
/// All defaults are filled at the ingestion boundary: numeric fields are 0.0
/// when the source was blank or malformed, classification fields carry their
/// sentinel, descriptive fields are empty strings. Downstream code never has
/// to ask whether a column existed — that lives in [`ColumnPresence`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Group id: which escandallo (cost breakdown) this line belongs to.
    pub escandallo: String,
    /// Item code, rendered as a stable string with no trailing `.0` artifact.
    pub codigo: String,
    /// Item description.
    pub nombre: String,
    /// Quantity in kilograms.
    pub cantidad_kg: f64,
    /// Cutting cost component.
    pub coste_despiece: f64,
    /// Freezing cost component.
    pub coste_congelacion: f64,
    /// Unit price (EXW). The single user-editable field.
    pub precio_exw: f64,
    /// Free-text role marker; a line containing "principal" is the group's
    /// primary line, used for display consolidation only.
    pub tipo: String,
    pub cliente: String,
    /// Snapshot date as it appeared in the feed.
    pub fecha: String,
    /// Day-first parse of `fecha`; `None` for blank or unparseable text.
    pub fecha_parsed: Option<NaiveDate>,
    pub familia: String,
    pub formato: String,
    /// Allocation output. `None` until the engine has run, and `None` when
    /// the feed lacked the allocation input columns.
    pub derived: Option<Derived>,
}

/// Per-line allocation result. Computed by the engine, never authoritative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    /// Sum of `cantidad_kg` over the line's group.
    pub total_kg_grupo: f64,
    /// This line's proportional weight within its group, by quantity.
    /// 0.0 when the group's total quantity is 0.
    pub share: f64,
    /// `(precio_exw − coste_congelacion − coste_despiece) × share`.
    pub precio_escandallo: f64,
}

/// Which optional source columns were actually present in the feed.
///
/// Ingestion materializes every field of [`LineItem`] regardless, but the
/// engine and the date filter only act when their inputs really existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnPresence {
    pub cantidad: bool,
    pub coste_despiece: bool,
    pub coste_congelacion: bool,
    pub precio_exw: bool,
    pub tipo: bool,
    pub fecha: bool,
    pub familia: bool,
    pub formato: bool,
}

impl ColumnPresence {
    /// The allocation is applicable only when quantity, both costs, and the
    /// price column all came from the source.
    pub fn has_allocation_inputs(&self) -> bool {
        self.cantidad && self.coste_despiece && self.coste_congelacion && self.precio_exw
    }
}

/// The full line-item table for one session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EscandalloTable {
    pub rows: Vec<LineItem>,
    pub columns: ColumnPresence,
}

impl EscandalloTable {
    pub fn new(rows: Vec<LineItem>, columns: ColumnPresence) -> Self {
        Self { rows, columns }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Group ids in first-appearance order.
    pub fn group_ids(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.escandallo.as_str()) {
                seen.push(row.escandallo.as_str());
            }
        }
        seen
    }

    /// All rows belonging to one group, in table order.
    pub fn group_rows(&self, escandallo: &str) -> Vec<&LineItem> {
        self.rows
            .iter()
            .filter(|r| r.escandallo == escandallo)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(escandallo: &str, codigo: &str) -> LineItem {
        LineItem {
            escandallo: escandallo.into(),
            codigo: codigo.into(),
            nombre: String::new(),
            cantidad_kg: 1.0,
            coste_despiece: 0.0,
            coste_congelacion: 0.0,
            precio_exw: 0.0,
            tipo: String::new(),
            cliente: String::new(),
            fecha: String::new(),
            fecha_parsed: None,
            familia: String::new(),
            formato: String::new(),
            derived: None,
        }
    }

    #[test]
    fn group_ids_preserve_first_appearance_order() {
        let table = EscandalloTable::new(
            vec![item("B", "1"), item("A", "2"), item("B", "3"), item("C", "4")],
            ColumnPresence::default(),
        );
        assert_eq!(table.group_ids(), vec!["B", "A", "C"]);
    }

    #[test]
    fn group_rows_filters_by_group() {
        let table = EscandalloTable::new(
            vec![item("B", "1"), item("A", "2"), item("B", "3")],
            ColumnPresence::default(),
        );
        let rows = table.group_rows("B");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].codigo, "1");
        assert_eq!(rows[1].codigo, "3");
    }

    #[test]
    fn allocation_inputs_require_all_four_columns() {
        let mut cols = ColumnPresence {
            cantidad: true,
            coste_despiece: true,
            coste_congelacion: true,
            precio_exw: true,
            ..Default::default()
        };
        assert!(cols.has_allocation_inputs());
        cols.coste_congelacion = false;
        assert!(!cols.has_allocation_inputs());
    }
}
