use super::{catalog::Catalog, entities::PriceRow};

/// Shared UI state. The catalog is loaded once at startup and never mutated;
/// scan results are replaced wholesale on every run.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
    /// Rows of the last completed scan, already sorted by profit descending.
    pub rows: Vec<PriceRow>,
    pub scanning: bool,
    /// Batches that failed during the last scan (index, reason).
    pub failed_batches: Vec<(usize, String)>,
}

impl AppState {
    pub fn has_results(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn begin_scan(&mut self) {
        self.scanning = true;
        self.rows.clear();
        self.failed_batches.clear();
    }

    pub fn finish_scan(&mut self, rows: Vec<PriceRow>, failed_batches: Vec<(usize, String)>) {
        self.scanning = false;
        self.rows = rows;
        self.failed_batches = failed_batches;
    }
}
