//! Decoder for the extraction service's response JSON.
//!
//! The wire shape is
//! `{ total_pages, total_rows, pages: [{ page_number, rows: [...] }] }`
//! with 1-based page numbers. Field-level problems never abort the decode:
//! missing fields default to empty, a malformed row decodes to an empty
//! slot, and unknown symbol names pass through verbatim. Every tolerated
//! problem is reported as a [`DecodeWarning`] so the reviewer can see what
//! was dropped or left unresolved.

use crate::error::KeskusError;
use crate::model::RowData;
use crate::symbols;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    total_pages: usize,
    #[serde(default)]
    total_rows: usize,
    #[serde(default)]
    pages: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct WirePage {
    #[serde(default)]
    page_number: usize,
    #[serde(default)]
    rows: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct WireRow {
    #[serde(default)]
    row_index: Option<usize>,
    #[serde(default, alias = "kuvaus")]
    kuvateksti: String,
    #[serde(default)]
    nro: String,
    #[serde(default)]
    suoja: String,
    #[serde(default)]
    kaapeli: String,
    #[serde(default)]
    symbols: Vec<String>,
}

/// Outcome of decoding one wire row.
enum DecodedRow {
    Valid(WireRow),
    Malformed { reason: String },
}

/// A tolerated problem in the extraction response.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeWarning {
    /// 1-based page number on the wire, when the problem is page-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,
    pub message: String,
}

/// The decoded response, ready for `ExtractionStore::replace_all`.
#[derive(Debug, Default)]
pub struct DecodedExtraction {
    /// 0-based page index -> row slots.
    pub pages: BTreeMap<usize, Vec<RowData>>,
    /// Totals as reported by the service (informational).
    pub total_pages: usize,
    pub total_rows: usize,
    pub warnings: Vec<DecodeWarning>,
}

/// Decode the raw extraction response body.
///
/// Fails only when the body is not a JSON object at all; everything below
/// the top level degrades to defaults plus warnings.
pub fn decode_extraction(json: &str) -> Result<DecodedExtraction, KeskusError> {
    let wire: WireResponse =
        serde_json::from_str(json).map_err(|e| KeskusError::Decode(e.to_string()))?;

    let mut out = DecodedExtraction {
        total_pages: wire.total_pages,
        total_rows: wire.total_rows,
        ..Default::default()
    };

    for page_value in wire.pages {
        let page: WirePage = match serde_json::from_value(page_value) {
            Ok(p) => p,
            Err(e) => {
                push_warning(&mut out.warnings, None, format!("skipped malformed page: {e}"));
                continue;
            }
        };

        if page.page_number == 0 {
            push_warning(
                &mut out.warnings,
                None,
                "skipped page with page_number 0 (expected 1-based)".to_string(),
            );
            continue;
        }
        let page_index = page.page_number - 1;

        let mut rows: Vec<RowData> = Vec::with_capacity(page.rows.len());
        for (seq, row_value) in page.rows.into_iter().enumerate() {
            let (slot, data) = match decode_row(row_value) {
                DecodedRow::Valid(row) => {
                    let slot = row.row_index.unwrap_or(seq);
                    (slot, resolve_row(row, page.page_number, &mut out.warnings))
                }
                DecodedRow::Malformed { reason } => {
                    push_warning(
                        &mut out.warnings,
                        Some(page.page_number),
                        format!("row {seq} malformed, stored as empty: {reason}"),
                    );
                    (seq, RowData::default())
                }
            };

            if rows.len() <= slot {
                rows.resize_with(slot + 1, RowData::default);
            }
            rows[slot] = data;
        }

        out.pages.insert(page_index, rows);
    }

    Ok(out)
}

fn decode_row(value: serde_json::Value) -> DecodedRow {
    match serde_json::from_value::<WireRow>(value) {
        Ok(row) => DecodedRow::Valid(row),
        Err(e) => DecodedRow::Malformed {
            reason: e.to_string(),
        },
    }
}

/// Translate one valid wire row into store form, resolving symbol names
/// against the catalog. Unknown names pass through as opaque icon ids.
fn resolve_row(row: WireRow, page_number: usize, warnings: &mut Vec<DecodeWarning>) -> RowData {
    let mut icons = Vec::with_capacity(row.symbols.len());
    for raw in &row.symbols {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        match symbols::resolve_symbol(raw) {
            Some(id) => icons.push(id.to_string()),
            None => {
                push_warning(
                    warnings,
                    Some(page_number),
                    format!("unknown symbol '{raw}', kept as-is"),
                );
                icons.push(raw.to_string());
            }
        }
    }

    RowData {
        icons,
        nro: row.nro,
        kuvateksti: row.kuvateksti,
        suoja: row.suoja,
        kaapeli: row.kaapeli,
    }
}

fn push_warning(warnings: &mut Vec<DecodeWarning>, page_number: Option<usize>, message: String) {
    match page_number {
        Some(p) => warn!(page = p, "{message}"),
        None => warn!("{message}"),
    }
    warnings.push(DecodeWarning {
        page_number,
        message,
    });
}
