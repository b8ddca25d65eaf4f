//! Feature modules - optional input adapters
//!
//! - CSV and JSON row loading (`data-loading` feature)

#[cfg(feature = "data-loading")]
pub mod loading;

#[cfg(feature = "data-loading")]
pub use loading::{extend_from_json, rows_from_json, table_from_csv};
