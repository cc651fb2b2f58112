use std::time::Duration;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{catalog, AppState},
    infra::catalog::{CacheStatus, CatalogClient},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{DashboardPage, ListingsPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_highlights, save_highlights},
    },
};

/// Window within which bursts of filter/sort changes collapse into a single
/// query pass.
pub const QUERY_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/listings")]
    Listings {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);

    // Seed the highlight set from durable storage before anything renders.
    use_hook({
        let mut state = state.clone();
        move || {
            state.with_mut(|st| st.highlights = load_highlights());
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Bumped by the settings page to force a reload of the catalog.
    let reload_ticket = use_signal(|| 0u32);
    use_context_provider(|| reload_ticket.clone());

    let _catalog = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let reload_ticket = reload_ticket.clone();
        move || {
            let _ticket = reload_ticket();
            async move { load_catalog(state.clone(), toasts.clone()).await }
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Write-through persistence: called by every highlight mutator right after
/// the in-memory change, so durable storage never lags the set.
pub fn persist_highlights(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.highlights.clone());
    if let Err(err) = save_highlights(&snapshot) {
        println!("Failed to persist highlights: {err}");
    }
}

async fn load_catalog(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
) -> Option<CacheStatus> {
    let client = match CatalogClient::new() {
        Ok(client) => client,
        Err(err) => {
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Failed to initialise catalog client: {err}"),
            );
            return None;
        }
    };

    let payload = match client.get_catalog().await {
        Ok(payload) => payload,
        Err(err) => {
            let message = format!("Failed to load catalog: {err}");
            state.with_mut(|st| st.catalog.error = Some(message.clone()));
            push_toast(toasts.clone(), ToastKind::Error, message);
            return None;
        }
    };

    match catalog::load(&payload.raw) {
        Ok((listings, brands)) => {
            state.with_mut(|st| {
                st.apply_catalog(
                    listings,
                    brands,
                    payload.fetched_at,
                    payload.status == CacheStatus::Stale,
                );
            });
            if payload.status == CacheStatus::Stale {
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "Loaded cached catalog; data might be stale.",
                );
            }
            Some(payload.status)
        }
        Err(err) => {
            // MalformedCatalog is the one failure the UI has to see.
            let message = format!("Catalog rejected: {err}");
            state.with_mut(|st| st.catalog.error = Some(message.clone()));
            push_toast(toasts.clone(), ToastKind::Error, message);
            None
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Listings() -> Element {
    rsx! { Shell { ListingsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
