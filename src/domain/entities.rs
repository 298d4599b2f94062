use serde::{Deserialize, Serialize};

/// Identifier used by the Albion data project for items (e.g. `T4_ORE`).
pub type ItemId = String;

/// The six royal cities the scanner queries, in the order they are sent in the
/// `locations` query parameter.
pub const CITIES: [&str; 6] = [
    "Bridgewatch",
    "Martlock",
    "Thetford",
    "Fort Sterling",
    "Lymhurst",
    "Caerleon",
];

/// Category markers for gatherables, refined goods, mounts and tools. An item
/// id qualifies for the scan when it contains one of these and starts with `T`.
pub const CATEGORY_PREFIXES: [&str; 12] = [
    "MOUNT_", "TOOL_", "ORE_", "WOOD_", "FIBER_", "HIDE_", "STONE_", "BAR_", "PLANK_", "CLOTH_",
    "LEATHER_", "BLOCK_",
];

/// One retained marketplace quote: an item in a city where both a sell offer
/// and a buy order currently exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRow {
    pub city: String,
    pub item_id: ItemId,
    /// Localized display name, or the raw id when the catalog has no entry.
    pub item_name: String,
    /// Lowest current player ask price in this city.
    pub sell_price_min: i64,
    /// Highest current player bid price in this city.
    pub buy_price_max: i64,
    /// `sell_price_min - buy_price_max`; naive spread ignoring fees/transport.
    pub potential_profit: i64,
}

impl PriceRow {
    pub fn new(city: String, item_id: ItemId, item_name: String, sell: i64, buy: i64) -> Self {
        Self {
            city,
            item_id,
            item_name,
            sell_price_min: sell,
            buy_price_max: buy,
            potential_profit: sell - buy,
        }
    }
}

/// A raw quote as reported by the price API, before the completeness filter.
/// Absent prices arrive as 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub item_id: ItemId,
    pub city: String,
    pub sell_price_min: i64,
    pub buy_price_max: i64,
}

/// Result of a single batched price request.
///
/// A non-200 response counts as `Fetched` with no quotes (silently ignored per
/// the original behavior), while transport or decode errors become `Failed`
/// and are surfaced to the user. Partial failure never aborts a scan.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchOutcome {
    Fetched(Vec<Quote>),
    Failed { batch: usize, reason: String },
}
