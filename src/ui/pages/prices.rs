use dioxus::prelude::*;

use crate::{
    domain::{city_summary, AppState},
    ui::components::results_table::{CitySummaryTable, ResultsTable},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    ui::theme,
    util::export,
};

#[component]
pub fn PricesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let scan_request = use_context::<Signal<Option<u64>>>();
    let scan_ticket = use_signal(|| 0_u64);

    let scanning = state.with(|st| st.scanning);
    let has_results = state.with(|st| st.has_results());
    let rows = state.with(|st| st.rows.clone());
    let summary = city_summary(&rows);

    let on_scan = {
        let toasts = toasts.clone();
        let mut scan_request = scan_request.clone();
        let mut scan_ticket = scan_ticket.clone();
        move |_| {
            if scanning {
                return;
            }
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Obteniendo precios y procesando información...",
            );
            let ticket = scan_ticket() + 1;
            scan_ticket.set(ticket);
            scan_request.set(Some(ticket));
        }
    };

    let on_download = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let rows = state.with(|st| st.rows.clone());
            if rows.is_empty() {
                return;
            }
            match export::save_table(&rows) {
                Ok(path) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Excel guardado en {}", path.display()),
                ),
                Err(error) => push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("No se pudo guardar el Excel: {error}"),
                ),
            }
        }
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                div {
                    h1 { "Precios del Marketplace" }
                    p { class: "{theme::TEXT_MUTED}",
                        "Consulta precios actualizados por ciudad y descarga el Excel. Los nombres salen del items.json local."
                    }
                }
                button {
                    class: "{theme::BTN_PRIMARY}",
                    disabled: scanning,
                    onclick: on_scan,
                    if scanning { "Consultando..." } else { "🔄 Generar precios actualizados" }
                }
            }

            if scanning {
                div { class: "{theme::PANEL_MUTED}", "Consultando la API de precios, esto puede tardar unos segundos..." }
            } else if !has_results {
                div { class: "{theme::PANEL_MUTED}",
                    "Sin datos todavía. Genera precios actualizados para ver la tabla."
                }
            } else {
                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "Resultados" }
                    ResultsTable { rows: rows.clone() }
                    button {
                        class: "{theme::BTN_GHOST}",
                        onclick: on_download,
                        "📥 Descargar Excel"
                    }
                }

                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "🏆 Top Ganancias por Ciudad" }
                    CitySummaryTable { rows: summary }
                }
            }
        }
    }
}
