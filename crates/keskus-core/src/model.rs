use serde::{Deserialize, Serialize};

/// One editable table row as held by the extraction store.
///
/// Fields mirror the review table columns: symbol classification plus the
/// four free-text fields. Everything defaults to empty, matching an
/// unfilled slot in the per-page table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowData {
    #[serde(default)]
    pub icons: Vec<String>,
    #[serde(default)]
    pub nro: String,
    #[serde(default)]
    pub kuvateksti: String,
    #[serde(default)]
    pub suoja: String,
    #[serde(default)]
    pub kaapeli: String,
}

impl RowData {
    /// True when no field carries data. Such rows are unfilled table
    /// slots, not devices, and are excluded from flattening.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
            && self.nro.trim().is_empty()
            && self.kuvateksti.trim().is_empty()
            && self.suoja.trim().is_empty()
            && self.kaapeli.trim().is_empty()
    }
}

/// One physical device in the flattened, page-ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRow {
    /// Synthesized from `(page index, row index)`, so the same slot always
    /// yields the same identifier across recomputation.
    pub id: String,
    /// 1-based page number (= store page index + 1).
    pub page_number: usize,
    /// Row slot index within the page.
    pub row_number: usize,
    pub icons: Vec<String>,
    pub nro: String,
    pub kuvateksti: String,
    pub suoja: String,
    pub kaapeli: String,
}

impl DeviceRow {
    pub fn from_row_data(page_index: usize, row_index: usize, data: &RowData) -> DeviceRow {
        DeviceRow {
            id: format!("{}-{}", page_index, row_index),
            page_number: page_index + 1,
            row_number: row_index,
            icons: data.icons.clone(),
            nro: data.nro.clone(),
            kuvateksti: data.kuvateksti.clone(),
            suoja: data.suoja.clone(),
            kaapeli: data.kaapeli.clone(),
        }
    }
}

/// Presentation/export toggles. Pure display concerns, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Include cable columns in tables and exports.
    pub show_cable: bool,
    /// Split combined `suoja` strings ("16A/20A") into input/output.
    pub separate_input_output: bool,
}
