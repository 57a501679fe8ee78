// Parser crate for the daily bicycle-production dataset.
// Tolerant line-oriented loader plus the record types it produces.

pub mod loader;
pub mod types;

// Re-export main types
pub use loader::{load_production_file, parse_production_rows};
pub use types::{BikeModel, LoadError, ProductionRecord};
