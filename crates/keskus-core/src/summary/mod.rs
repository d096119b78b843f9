pub mod engine;
pub mod outcome;
pub mod protection;

pub use engine::{aggregate_devices, flatten_rows, protection_histogram, summarize};
pub use outcome::{AggregatedItem, ProtectionSummary, Summary};
pub use protection::{split_suoja, SuojaSplit};
