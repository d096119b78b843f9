use crate::model::DeviceRow;
use crate::store::ExtractionStore;
use crate::summary::outcome::{AggregatedItem, ProtectionSummary, Summary};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

/// Flatten the page-indexed store into a single ordered device list.
///
/// Ascending page index, then ascending row index. Rows where every
/// field is empty are unfilled table slots and are excluded; they count
/// nowhere. Never fails; absent pages degrade to nothing.
pub fn flatten_rows(store: &ExtractionStore) -> Vec<DeviceRow> {
    let mut devices = Vec::new();
    for (&page_index, rows) in store.pages() {
        for (row_index, data) in rows.iter().enumerate() {
            if data.is_empty() {
                continue;
            }
            devices.push(DeviceRow::from_row_data(page_index, row_index, data));
        }
    }
    devices
}

/// Group key: the icon sequence as an order-insensitive set, joined with
/// the raw protection string. Cable type is not part of the key; cable
/// differences within a group surface as a mismatch instead.
fn group_key(icons: &[String], suoja: &str) -> String {
    let mut set: Vec<&str> = icons.iter().map(String::as_str).collect();
    set.sort_unstable();
    set.dedup();
    format!("{}|{}", set.join("+"), suoja)
}

/// Fold the flattened device list into aggregated groups.
///
/// Output order: descending count, ties in first-encountered order
/// (stable sort). The representative icon sequence is the one from the
/// first row that established the group.
pub fn aggregate_devices(devices: &[DeviceRow]) -> Vec<AggregatedItem> {
    let mut items: Vec<AggregatedItem> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for device in devices {
        let key = group_key(&device.icons, &device.suoja);
        let idx = *index_by_key.entry(key).or_insert_with(|| {
            items.push(AggregatedItem {
                icons: device.icons.clone(),
                suoja: device.suoja.clone(),
                kaapeli_types: Vec::new(),
                has_cable_mismatch: false,
                count: 0,
                nros: Vec::new(),
            });
            items.len() - 1
        });

        let item = &mut items[idx];
        item.count += 1;
        if !device.nro.trim().is_empty() {
            item.nros.push(device.nro.clone());
        }
        let kaapeli = device.kaapeli.trim();
        if !kaapeli.is_empty() && !item.kaapeli_types.iter().any(|k| k == kaapeli) {
            item.kaapeli_types.push(kaapeli.to_string());
        }
    }

    for item in &mut items {
        item.has_cable_mismatch = item.kaapeli_types.len() > 1;
    }

    items.sort_by(|a, b| b.count.cmp(&a.count));
    items
}

/// Histogram over raw (unsplit) protection strings.
///
/// The denominator is the flattened device count, the same one used for
/// the totals everywhere else. Zero devices yield an empty histogram.
pub fn protection_histogram(devices: &[DeviceRow]) -> Vec<ProtectionSummary> {
    let total = devices.len();
    let mut entries: Vec<ProtectionSummary> = Vec::new();
    let mut index_by_suoja: HashMap<&str, usize> = HashMap::new();

    for device in devices {
        let idx = *index_by_suoja
            .entry(device.suoja.as_str())
            .or_insert_with(|| {
                entries.push(ProtectionSummary {
                    suoja: device.suoja.clone(),
                    count: 0,
                    percentage: Decimal::ZERO,
                });
                entries.len() - 1
            });
        entries[idx].count += 1;
    }

    for entry in &mut entries {
        entry.percentage = percentage_of(entry.count, total);
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// `count / total * 100`, one decimal place. Total zero maps to 0.0
/// rather than a division error.
fn percentage_of(count: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::new(0, 1);
    }
    let mut pct = (Decimal::from(count as u64) * Decimal::from(100) / Decimal::from(total as u64))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so "100" renders as "100.0" wherever it is displayed
    pct.rescale(1);
    pct
}

/// Build the full derived view over one store snapshot.
///
/// Pure and total: re-running over an unchanged store yields identical
/// sequences in identical order.
pub fn summarize(store: &ExtractionStore) -> Summary {
    let devices = flatten_rows(store);
    let items = aggregate_devices(&devices);
    let by_protection = protection_histogram(&devices);

    let total_count = devices.len();
    let unique_types = items.len();
    let unique_protections = by_protection.len();

    Summary {
        devices,
        items,
        by_protection,
        total_count,
        unique_types,
        unique_protections,
    }
}
