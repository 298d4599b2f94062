//! Domain logic for the marketplace scan lives here.

pub mod app_state;
pub mod catalog;
pub mod entities;
pub mod report;

pub use app_state::AppState;
pub use catalog::{Catalog, CatalogError, CATALOG_FILE_NAME};
pub use entities::{BatchOutcome, ItemId, PriceRow, Quote, CATEGORY_PREFIXES, CITIES};
pub use report::{assemble_rows, city_summary, sort_by_profit};
