//! Feed ingestion — header canonicalization, typed normalization, snapshot filtering.
//!
//! The published sheet is hand-maintained: column names drift (accents, case,
//! spacing), numeric cells use the Spanish locale, optional columns come and
//! go. Everything is normalized here, once, so the rest of the crate works
//! with fully-populated [`LineItem`]s.

use std::collections::HashMap;
use std::io::Read;

use chrono::NaiveDate;

use super::numeric::{normalize_codigo, parse_locale_number};
use crate::domain::{ColumnPresence, EscandalloTable, LineItem};

/// Errors from the ingestion layer. All of them are fatal for the session —
/// a feed that cannot be parsed must not yield a partially-initialized table.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("feed is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("feed has no '{0}' column")]
    MissingGroupColumn(&'static str),
}

/// Canonical column name for a raw header cell.
///
/// Trims surrounding whitespace and folds the known accented/unaccented,
/// cased, and spaced/underscored variants onto one spelling. Unknown headers
/// pass through trimmed.
fn canonical_header(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.to_lowercase().as_str() {
        "escandallo" => "Escandallo",
        "código" | "codigo" => "Código",
        "nombre" => "Nombre",
        "cantidad(kg)" | "cantidad (kg)" | "cantidad kg" => "Cantidad(kg)",
        "coste_despiece" | "coste despiece" => "Coste_despiece",
        "coste_congelación" | "coste congelación" | "coste_congelacion" | "coste congelacion" => {
            "Coste_congelación"
        }
        "precio exw" | "precio_exw" => "Precio EXW",
        "precio_escandallo" | "precio escandallo" => "Precio_escandallo",
        "tipo" => "Tipo",
        "cliente" => "Cliente",
        "fecha" => "Fecha",
        "familia" => "Familia",
        "formato" => "Formato",
        _ => return trimmed.to_string(),
    }
    .to_string()
}

/// Day-first date parse. Blank or unparseable text maps to `None`, which the
/// snapshot filter treats as "keep".
pub fn parse_feed_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    const FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Classification cells get a sentinel when blank (or when the whole column
/// was missing from the source).
fn classification(raw: &str, column: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        format!("Sin {column}")
    } else {
        trimmed.to_string()
    }
}

/// Parse the raw feed body into a normalized table.
///
/// The group column `Escandallo` is required; every other column is optional
/// and defaulted, so downstream access never fails. The returned table has no
/// derived values yet — run [`crate::engine::recalculate`] on it.
pub fn load_bytes(bytes: &[u8]) -> Result<EscandalloTable, IngestError> {
    load_from_reader(bytes)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<EscandalloTable, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (i, header) in headers.iter().enumerate() {
        index.entry(canonical_header(header)).or_insert(i);
    }

    if !index.contains_key("Escandallo") {
        return Err(IngestError::MissingGroupColumn("Escandallo"));
    }

    let columns = ColumnPresence {
        cantidad: index.contains_key("Cantidad(kg)"),
        coste_despiece: index.contains_key("Coste_despiece"),
        coste_congelacion: index.contains_key("Coste_congelación"),
        precio_exw: index.contains_key("Precio EXW"),
        tipo: index.contains_key("Tipo"),
        fecha: index.contains_key("Fecha"),
        familia: index.contains_key("Familia"),
        formato: index.contains_key("Formato"),
    };

    let mut rows: Vec<LineItem> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let cell = |name: &str| -> &str {
            index
                .get(name)
                .and_then(|&i| record.get(i))
                .unwrap_or("")
        };

        let fecha = cell("Fecha").trim().to_string();
        rows.push(LineItem {
            escandallo: cell("Escandallo").trim().to_string(),
            codigo: normalize_codigo(cell("Código")),
            nombre: cell("Nombre").trim().to_string(),
            cantidad_kg: parse_locale_number(cell("Cantidad(kg)")),
            coste_despiece: parse_locale_number(cell("Coste_despiece")),
            coste_congelacion: parse_locale_number(cell("Coste_congelación")),
            precio_exw: parse_locale_number(cell("Precio EXW")),
            tipo: cell("Tipo").trim().to_string(),
            cliente: cell("Cliente").trim().to_string(),
            fecha_parsed: parse_feed_date(&fecha),
            fecha,
            familia: classification(cell("Familia"), "Familia"),
            formato: classification(cell("Formato"), "Formato"),
            derived: None,
        });
    }

    if columns.fecha {
        retain_latest_snapshot(&mut rows);
    }

    Ok(EscandalloTable::new(rows, columns))
}

/// Keep, per group, only the rows dated at the group's maximum parsed date.
/// Rows with no parseable date are never treated as "older" and always
/// survive.
fn retain_latest_snapshot(rows: &mut Vec<LineItem>) {
    let mut max_by_group: HashMap<String, NaiveDate> = HashMap::new();
    for row in rows.iter() {
        if let Some(date) = row.fecha_parsed {
            max_by_group
                .entry(row.escandallo.clone())
                .and_modify(|max| {
                    if date > *max {
                        *max = date;
                    }
                })
                .or_insert(date);
        }
    }

    rows.retain(|row| match row.fecha_parsed {
        None => true,
        Some(date) => max_by_group
            .get(&row.escandallo)
            .map(|max| date == *max)
            .unwrap_or(true),
    });
}
