use std::time::SystemTime;

use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::AppState,
    infra::cache::clear_catalog_cache,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::{check_for_update, version_label, APP_REPO_URL},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let reload_ticket = use_context::<Signal<u32>>();

    let catalog = state.with(|st| st.catalog.clone());
    let listing_count = state.with(|st| st.listings.len());

    let fetched_label = catalog
        .fetched_at
        .map(format_timestamp)
        .unwrap_or_else(|| "never".to_string());
    let source_label = if catalog.from_cache {
        "on-disk cache (stale)"
    } else {
        "network"
    };

    let version = version_label();
    let update_status = use_signal(|| None::<String>);

    let on_reload = {
        let mut reload_ticket = reload_ticket.clone();
        let toasts = toasts.clone();
        move |_| {
            clear_catalog_cache();
            reload_ticket.with_mut(|ticket| *ticket += 1);
            push_toast(toasts.clone(), ToastKind::Info, "Reloading catalog…");
        }
    };

    let on_check_update = {
        let mut update_status = update_status.clone();
        move |_| {
            update_status.set(Some("Checking…".to_string()));
            let mut update_status = update_status.clone();
            spawn(async move {
                let message = match check_for_update().await {
                    Ok(info) => info.to_string(),
                    Err(err) => format!("Update check failed: {err}"),
                };
                update_status.set(Some(message));
            });
        }
    };

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-2xl font-semibold text-slate-100", "Settings" }

            section { class: "{theme::PANEL} space-y-3 p-4",
                h3 { class: "text-sm font-semibold text-slate-200", "Catalog" }
                p { class: "text-sm text-slate-300", "Listings loaded: {listing_count}" }
                p { class: "text-sm text-slate-300", "Fetched: {fetched_label} ({source_label})" }
                if let Some(error) = catalog.error {
                    p { class: "text-sm text-rose-300", "{error}" }
                }
                button {
                    class: theme::BTN_PRIMARY,
                    onclick: on_reload,
                    "Reload Catalog"
                }
            }

            section { class: "{theme::PANEL} space-y-3 p-4",
                h3 { class: "text-sm font-semibold text-slate-200", "About" }
                p { class: "text-sm text-slate-300", "Carada {version}" }
                p { class: "{theme::TEXT_MUTED}", "{APP_REPO_URL}" }
                button {
                    class: theme::BTN_PRIMARY,
                    onclick: on_check_update,
                    "Check for Updates"
                }
                if let Some(status) = update_status() {
                    p { class: "text-sm text-slate-300", "{status}" }
                }
            }
        }
    }
}

fn format_timestamp(time: SystemTime) -> String {
    let datetime = OffsetDateTime::from(time);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02} UTC",
        datetime.year(),
        datetime.month() as u8,
        datetime.day(),
        datetime.hour(),
        datetime.minute()
    )
}
