use std::{env, path::PathBuf};

use dioxus::{prelude::*, signals::Signal};
use tracing::{error, info, warn};

use crate::{
    domain::{assemble_rows, sort_by_profit, AppState, BatchOutcome, Catalog, CATALOG_FILE_NAME, CITIES},
    infra::market::MarketClient,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::PricesPage,
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Prices {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    let toasts = use_signal(Vec::<ToastMessage>::new);

    // One-time catalog load; the mapping is immutable for the process lifetime.
    use_hook({
        let mut state = state.clone();
        let toasts = toasts.clone();
        move || match Catalog::load(&catalog_path()) {
            Ok(catalog) => {
                info!(items = catalog.len(), "item catalog loaded");
                state.with_mut(|st| st.catalog = catalog);
            }
            Err(err) => {
                error!(%err, "catalog load failed");
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "❌ Error al cargar el archivo local items.json",
                );
            }
        }
    });

    use_context_provider(|| state.clone());
    use_context_provider(|| toasts.clone());

    // Scan trigger shared with the page; the ticket changes per click.
    let scan_request = use_signal(|| None::<u64>);
    use_context_provider(|| scan_request.clone());

    let _scan = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let scan_request = scan_request.clone();
        move || async move { run_scan(state.clone(), toasts.clone(), scan_request.clone()).await }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Prices() -> Element {
    rsx! { Shell { PricesPage {} } }
}

/// `items.json` next to the executable wins; otherwise the working directory.
fn catalog_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CATALOG_FILE_NAME)))
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from(CATALOG_FILE_NAME))
}

/// Runs one full scan when a ticket is queued: filter catalog ids, fetch all
/// batches sequentially, assemble and sort rows, store them, report status.
async fn run_scan(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    mut scan_request: Signal<Option<u64>>,
) -> Option<u64> {
    let ticket = scan_request()?;

    state.with_mut(AppState::begin_scan);
    let items = state.with(|st| st.catalog.filtered_items());

    if items.is_empty() {
        scan_request.set(None);
        state.with_mut(|st| st.finish_scan(Vec::new(), Vec::new()));
        warn!("scan requested with no matching catalog items, no requests issued");
        push_toast(
            toasts.clone(),
            ToastKind::Warning,
            "No se encontraron ítems para consultar.",
        );
        return None;
    }

    let client = match MarketClient::new() {
        Ok(client) => client,
        Err(err) => {
            scan_request.set(None);
            state.with_mut(|st| st.finish_scan(Vec::new(), Vec::new()));
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("No se pudo inicializar el cliente de precios: {err}"),
            );
            return None;
        }
    };

    info!(items = items.len(), "starting marketplace scan");
    let batches = client.fetch_prices(&items, &CITIES).await;

    let failed: Vec<(usize, String)> = batches
        .iter()
        .filter_map(|outcome| match outcome {
            BatchOutcome::Failed { batch, reason } => Some((*batch, reason.clone())),
            BatchOutcome::Fetched(_) => None,
        })
        .collect();

    let catalog = state.with(|st| st.catalog.clone());
    let mut rows = assemble_rows(&batches, &catalog);
    sort_by_profit(&mut rows);

    scan_request.set(None);

    for (batch, reason) in &failed {
        push_toast(
            toasts.clone(),
            ToastKind::Warning,
            format!("Error consultando ítems (lote {}): {reason}", batch + 1),
        );
    }
    if rows.is_empty() {
        push_toast(
            toasts.clone(),
            ToastKind::Warning,
            "No se encontraron ítems con precios de compra y venta simultáneos.",
        );
    } else {
        push_toast(toasts.clone(), ToastKind::Success, "✅ Datos cargados correctamente.");
    }

    info!(
        rows = rows.len(),
        failed_batches = failed.len(),
        "marketplace scan finished"
    );
    state.with_mut(|st| st.finish_scan(rows, failed));
    Some(ticket)
}
