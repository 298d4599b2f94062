//! Turns raw batch outcomes into the rows the UI and the export consume.
//!
//! Only quotes with both a positive sell offer and a positive buy order
//! survive; everything else is an incomplete market and carries no spread.

use std::{cmp::Ordering, collections::HashMap};

use super::{
    catalog::Catalog,
    entities::{BatchOutcome, PriceRow},
};

/// Flattens every successfully fetched batch into rows. Failed batches
/// contribute nothing; rows are not deduplicated.
pub fn assemble_rows(batches: &[BatchOutcome], catalog: &Catalog) -> Vec<PriceRow> {
    let mut rows = Vec::new();
    for batch in batches {
        let BatchOutcome::Fetched(quotes) = batch else {
            continue;
        };
        for quote in quotes {
            if quote.sell_price_min <= 0 || quote.buy_price_max <= 0 {
                continue;
            }
            rows.push(PriceRow::new(
                quote.city.clone(),
                quote.item_id.clone(),
                catalog.name_or_id(&quote.item_id),
                quote.sell_price_min,
                quote.buy_price_max,
            ));
        }
    }
    rows
}

/// Profit descending; ties by item name, then city, so repeated scans over
/// identical data render identically.
pub fn sort_by_profit(rows: &mut [PriceRow]) {
    rows.sort_by(profit_order);
}

fn profit_order(a: &PriceRow, b: &PriceRow) -> Ordering {
    b.potential_profit
        .cmp(&a.potential_profit)
        .then_with(|| a.item_name.cmp(&b.item_name))
        .then_with(|| a.city.cmp(&b.city))
}

/// One row per distinct city: the city's most profitable quote (ties resolved
/// by the same ordering as the full table). Output is sorted by city name.
pub fn city_summary(rows: &[PriceRow]) -> Vec<PriceRow> {
    let mut best: HashMap<&str, &PriceRow> = HashMap::new();
    for row in rows {
        best.entry(row.city.as_str())
            .and_modify(|current| {
                if profit_order(row, current) == Ordering::Less {
                    *current = row;
                }
            })
            .or_insert(row);
    }
    let mut summary: Vec<PriceRow> = best.into_values().cloned().collect();
    summary.sort_by(|a, b| a.city.cmp(&b.city));
    summary
}
