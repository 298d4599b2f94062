use dioxus::prelude::*;

use crate::domain::PriceRow;
use crate::ui::theme;

/// Full results table, one row per retained city/item quote.
#[component]
pub fn ResultsTable(rows: Vec<PriceRow>) -> Element {
    let count = rows.len();
    let rendered = rows.into_iter().map(RowView::from).collect::<Vec<_>>();

    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "{theme::TABLE}",
                thead {
                    tr {
                        th { "Ciudad" }
                        th { "Ítem" }
                        th { class: "num", "Precio Venta (jugadores)" }
                        th { class: "num", "Precio Compra (jugadores)" }
                        th { class: "num", "Ganancia Potencial" }
                    }
                }
                tbody {
                    for row in rendered {
                        tr {
                            td { "{row.city}" }
                            td { "{row.item_name}" }
                            td { class: "num", "{row.sell_display}" }
                            td { class: "num", "{row.buy_display}" }
                            td { class: "num profit", "{row.profit_display}" }
                        }
                    }
                }
            }
            p { class: "{theme::TEXT_MUTED}", "{count} cotizaciones completas." }
        }
    }
}

/// Per-city top-profit summary: one row per city.
#[component]
pub fn CitySummaryTable(rows: Vec<PriceRow>) -> Element {
    let rendered = rows.into_iter().map(RowView::from).collect::<Vec<_>>();

    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "{theme::TABLE}",
                thead {
                    tr {
                        th { "Ciudad" }
                        th { "Ítem" }
                        th { class: "num", "Ganancia Potencial" }
                    }
                }
                tbody {
                    for row in rendered {
                        tr {
                            td { "{row.city}" }
                            td { "{row.item_name}" }
                            td { class: "num profit", "{row.profit_display}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct RowView {
    city: String,
    item_name: String,
    sell_display: String,
    buy_display: String,
    profit_display: String,
}

impl From<PriceRow> for RowView {
    fn from(row: PriceRow) -> Self {
        Self {
            city: row.city,
            item_name: row.item_name,
            sell_display: format_silver(row.sell_price_min),
            buy_display: format_silver(row.buy_price_max),
            profit_display: format_silver(row.potential_profit),
        }
    }
}

/// Thousands separator per the es-ES convention: `1234567` → `1.234.567`.
fn format_silver(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_silver_groups_thousands() {
        assert_eq!(format_silver(0), "0");
        assert_eq!(format_silver(999), "999");
        assert_eq!(format_silver(1000), "1.000");
        assert_eq!(format_silver(1234567), "1.234.567");
        assert_eq!(format_silver(-4200), "-4.200");
    }
}
