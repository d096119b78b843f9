use crate::model::DeviceRow;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One group of devices sharing the same icon set and protection value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedItem {
    /// Representative icon sequence: the one from the first row that
    /// established the group, in that row's original order.
    pub icons: Vec<String>,
    /// Raw protection string shared by the group.
    pub suoja: String,
    /// Distinct non-empty cable types observed, in first-seen order.
    pub kaapeli_types: Vec<String>,
    /// True when more than one distinct cable type appears in the group.
    pub has_cable_mismatch: bool,
    /// Number of devices folded into this group.
    pub count: usize,
    /// Device numbers of the contributing rows, in flattening order.
    pub nros: Vec<String>,
}

/// One row of the protection-value histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionSummary {
    /// Raw, unsplit protection string used as the grouping key.
    pub suoja: String,
    pub count: usize,
    /// `count / total * 100`, one decimal place. `0.0` on a zero total.
    pub percentage: Decimal,
}

/// The full derived view over one store snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Flattened device list, page order then row order.
    pub devices: Vec<DeviceRow>,
    /// Groups, descending by count (ties in first-encountered order).
    pub items: Vec<AggregatedItem>,
    /// Protection histogram, same ordering rule.
    pub by_protection: Vec<ProtectionSummary>,
    pub total_count: usize,
    pub unique_types: usize,
    pub unique_protections: usize,
}
