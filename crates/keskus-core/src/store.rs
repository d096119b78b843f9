use crate::model::RowData;
use std::collections::BTreeMap;

/// Process-wide state holding the current page -> rows mapping.
///
/// Keyed by 0-based page index; sparse, so pages without rows are simply
/// absent. Populated wholesale by `replace_all` (new upload or cache
/// restore) and mutated one cell at a time by `update_cell` (reviewer
/// edits). The aggregation engine only ever reads it through a shared
/// borrow and returns freshly allocated results.
#[derive(Debug, Clone, Default)]
pub struct ExtractionStore {
    pages: BTreeMap<usize, Vec<RowData>>,
}

impl ExtractionStore {
    pub fn new() -> ExtractionStore {
        ExtractionStore::default()
    }

    pub fn from_pages(pages: BTreeMap<usize, Vec<RowData>>) -> ExtractionStore {
        ExtractionStore { pages }
    }

    /// Replace the entire store contents. Destroys all previous rows.
    pub fn replace_all(&mut self, pages: BTreeMap<usize, Vec<RowData>>) {
        self.pages = pages;
    }

    /// Replace one `(page, row)` slot's data wholesale. Last write wins.
    ///
    /// The page's row vector is padded with empty rows if the slot lies
    /// beyond its current end, so edits to not-yet-extracted slots stick.
    pub fn update_cell(&mut self, page_index: usize, row_index: usize, data: RowData) {
        let rows = self.pages.entry(page_index).or_default();
        if rows.len() <= row_index {
            rows.resize_with(row_index + 1, RowData::default);
        }
        rows[row_index] = data;
    }

    pub fn pages(&self) -> &BTreeMap<usize, Vec<RowData>> {
        &self.pages
    }

    pub fn page(&self, page_index: usize) -> Option<&[RowData]> {
        self.pages.get(&page_index).map(|rows| rows.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.pages.values().all(|rows| rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(nro: &str) -> RowData {
        RowData {
            nro: nro.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_update_cell_pads_missing_slots() {
        let mut store = ExtractionStore::new();
        store.update_cell(2, 3, row("A1"));

        let page = store.page(2).unwrap();
        assert_eq!(page.len(), 4);
        assert!(page[0].is_empty());
        assert!(page[1].is_empty());
        assert!(page[2].is_empty());
        assert_eq!(page[3].nro, "A1");
    }

    #[test]
    fn test_update_cell_last_write_wins() {
        let mut store = ExtractionStore::new();
        store.update_cell(0, 0, row("old"));
        store.update_cell(0, 0, row("new"));
        assert_eq!(store.page(0).unwrap()[0].nro, "new");
    }

    #[test]
    fn test_replace_all_destroys_previous_rows() {
        let mut store = ExtractionStore::new();
        store.update_cell(0, 0, row("A1"));

        let mut pages = BTreeMap::new();
        pages.insert(5, vec![row("B1")]);
        store.replace_all(pages);

        assert!(store.page(0).is_none());
        assert_eq!(store.page(5).unwrap()[0].nro, "B1");
    }

    #[test]
    fn test_empty_store() {
        assert!(ExtractionStore::new().is_empty());
        let mut store = ExtractionStore::new();
        store.update_cell(1, 0, RowData::default());
        // Even a blank slot means the store has been populated
        assert!(!store.is_empty());
    }
}
