//! Integration tests for the decode -> store -> summarize -> export
//! pipeline, driven from raw extraction-response JSON exactly as the
//! service would return it.

use keskus_core::decode::decode_extraction;
use keskus_core::export::{build_export, write_xlsx, Cell};
use keskus_core::model::{DisplayOptions, RowData};
use keskus_core::store::ExtractionStore;
use keskus_core::summary::summarize;
use rust_decimal_macros::dec;

fn sample_response() -> &'static str {
    r#"{
        "total_pages": 2,
        "total_rows": 4,
        "pages": [
            {
                "page_number": 1,
                "rows": [
                    {"row_index": 0, "nro": "F1", "kuvateksti": "Valaistus",
                     "suoja": "16A", "kaapeli": "MMJ 3x1.5S",
                     "symbols": ["JOHDONSUOJA_1-NAP"]},
                    {"row_index": 1, "nro": "F2", "kuvateksti": "Pistorasiat",
                     "suoja": "16A", "kaapeli": "MMJ 3x1.5S",
                     "symbols": ["JOHDONSUOJA_1-NAP"]}
                ]
            },
            {
                "page_number": 2,
                "rows": [
                    {"row_index": 0, "nro": "F3", "kuvateksti": "Kiuas",
                     "suoja": "25A", "kaapeli": "MMJ 5x6S",
                     "symbols": ["VIKAVIRTASUOJA"]},
                    {"row_index": 1, "nro": "F4", "kuvateksti": "Tuntematon",
                     "suoja": "10A", "kaapeli": "",
                     "symbols": ["SOMETHING_NEW"]}
                ]
            }
        ]
    }"#
}

#[test]
fn decode_and_summarize_full_response() {
    let decoded = decode_extraction(sample_response()).unwrap();

    // The unknown symbol passes through and is reported, not dropped
    assert_eq!(decoded.warnings.len(), 1);
    assert!(decoded.warnings[0].message.contains("SOMETHING_NEW"));

    let mut store = ExtractionStore::new();
    store.replace_all(decoded.pages);
    let summary = summarize(&store);

    assert_eq!(summary.total_count, 4);
    assert_eq!(summary.unique_types, 3);
    assert_eq!(summary.unique_protections, 3);

    // 16A group leads with count 2; the two singles keep encounter order
    let counts: Vec<usize> = summary.items.iter().map(|i| i.count).collect();
    assert_eq!(counts, vec![2, 1, 1]);
    assert_eq!(summary.items[1].icons, vec!["VIKAVIRTASUOJA"]);
    assert_eq!(summary.items[2].icons, vec!["SOMETHING_NEW"]);

    assert_eq!(summary.by_protection[0].suoja, "16A");
    assert_eq!(summary.by_protection[0].percentage, dec!(50.0));

    // Page numbers restored to 1-based in the flattened list
    assert_eq!(summary.devices[0].page_number, 1);
    assert_eq!(summary.devices[2].page_number, 2);
}

#[test]
fn cell_edit_reflects_in_next_summary() {
    let decoded = decode_extraction(sample_response()).unwrap();
    let mut store = ExtractionStore::new();
    store.replace_all(decoded.pages);

    // Reviewer reclassifies F4 after checking the diagram
    store.update_cell(
        1,
        1,
        RowData {
            icons: vec!["VIKAVIRTASUOJA".into()],
            nro: "F4".into(),
            kuvateksti: "Tuntematon".into(),
            suoja: "25A".into(),
            kaapeli: "MMJ 5x6S".into(),
        },
    );

    let summary = summarize(&store);
    assert_eq!(summary.total_count, 4);
    // F3 and the edited F4 now share a group
    assert_eq!(summary.unique_types, 2);
    let vika = summary
        .items
        .iter()
        .find(|i| i.icons == vec!["VIKAVIRTASUOJA"])
        .unwrap();
    assert_eq!(vika.count, 2);
    assert!(!vika.has_cable_mismatch);
}

#[test]
fn summary_exports_to_xlsx_bytes() {
    let decoded = decode_extraction(sample_response()).unwrap();
    let mut store = ExtractionStore::new();
    store.replace_all(decoded.pages);
    let summary = summarize(&store);

    let opts = DisplayOptions {
        show_cable: true,
        separate_input_output: false,
    };
    let sheet = build_export(&summary, &opts);

    // Three blocks: summary + total, breakdown, devices
    assert!(sheet
        .rows
        .iter()
        .any(|r| r.first() == Some(&Cell::Text("ALL EXTRACTED DEVICES".into()))));
    let bytes = write_xlsx(&sheet).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn empty_response_produces_empty_summary() {
    let decoded = decode_extraction(r#"{"total_pages": 0, "total_rows": 0, "pages": []}"#).unwrap();
    let mut store = ExtractionStore::new();
    store.replace_all(decoded.pages);
    let summary = summarize(&store);

    assert_eq!(summary.total_count, 0);
    assert!(summary.items.is_empty());
    assert!(summary.by_protection.is_empty());

    // Export of an empty summary still succeeds
    let sheet = build_export(&summary, &DisplayOptions::default());
    assert!(write_xlsx(&sheet).is_ok());
}
