use dioxus::prelude::*;

use crate::{
    app::{persist_highlights, QUERY_DEBOUNCE},
    domain::{query, AppState, FilterField, Listing, SortOrder},
    ui::{components::listing_card::ListingCard, theme},
    util::debounce::Debouncer,
};

#[component]
pub fn ListingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let visible = use_signal(Vec::<Listing>::new);
    let debouncer = use_hook(Debouncer::new);

    // Any change to the dataset, criteria or sort schedules a recompute.
    // Bursts inside the debounce window collapse into a single query pass
    // over the latest inputs; superseded passes never run.
    use_effect({
        let state = state.clone();
        let debouncer = debouncer.clone();
        let visible = visible.clone();
        move || {
            let (listings, criteria, sort) =
                state.with(|st| (st.listings.clone(), st.criteria.clone(), st.sort));
            let debouncer = debouncer.clone();
            let mut visible = visible.clone();
            spawn(async move {
                if debouncer.debounce(QUERY_DEBOUNCE).await {
                    visible.set(query(&listings, &criteria, sort));
                }
            });
        }
    });

    let criteria = state.with(|st| st.criteria.clone());
    let sort = state.with(|st| st.sort);
    let highlights = state.with(|st| st.highlights.clone());
    let catalog_loaded = state.with(|st| !st.listings.is_empty());

    let brand_options = state.with(|st| st.brand_options());
    let year_options = state.with(|st| st.year_options());
    let province_options = state.with(|st| st.province_options());
    let status_options = state.with(|st| st.status_options());

    let on_toggle = {
        let mut state = state.clone();
        move |listing: Listing| {
            state.with_mut(|st| {
                st.highlights.toggle(listing);
            });
            persist_highlights(&state);
        }
    };

    let on_clear = {
        let mut state = state.clone();
        move |_| {
            state.with_mut(|st| st.highlights.clear());
            persist_highlights(&state);
        }
    };

    let results = visible();
    let result_count = results.len();
    let no_results_message = format!("No cars found with {}", criteria.describe());

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-2xl font-semibold text-slate-100", "All Cars" }

            if !highlights.is_empty() {
                section { class: "space-y-4",
                    div { class: "flex items-center justify-between",
                        h3 { class: "text-lg font-semibold text-indigo-200", "Highlighted Cars" }
                        button {
                            class: theme::BTN_DANGER,
                            onclick: on_clear,
                            "Clear All"
                        }
                    }
                    div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                        for listing in highlights.iter().cloned() {
                            ListingCard {
                                key: "{listing.id}",
                                listing,
                                pinned: true,
                                on_toggle,
                            }
                        }
                    }
                }
            }

            section {
                class: "{theme::PANEL} flex flex-wrap items-end gap-4 px-4 py-4",
                FilterSelect {
                    label: "Brand",
                    placeholder: "Any Brand",
                    options: brand_options,
                    selected: criteria.brand.clone(),
                    field: FilterField::Brand,
                }
                FilterSelect {
                    label: "Year",
                    placeholder: "Any Year",
                    options: year_options,
                    selected: criteria.year.clone(),
                    field: FilterField::Year,
                }
                FilterSelect {
                    label: "Province",
                    placeholder: "All Province",
                    options: province_options,
                    selected: criteria.province.clone(),
                    field: FilterField::Province,
                }
                FilterSelect {
                    label: "Status",
                    placeholder: "Any Status",
                    options: status_options,
                    selected: criteria.status.clone(),
                    field: FilterField::Status,
                }
            }

            section { class: "flex flex-wrap items-center gap-2",
                span { class: "text-xs uppercase tracking-wide text-slate-400", "Sort:" }
                SortButton { order: SortOrder::YearDescending, current: sort }
                SortButton { order: SortOrder::PriceAscending, current: sort }
                span { class: "ml-auto {theme::TEXT_MUTED}", "{result_count} cars" }
            }

            if !catalog_loaded {
                p { class: "text-sm text-slate-400", "Loading catalog…" }
            } else if results.is_empty() {
                p { class: "text-sm text-slate-400", "{no_results_message}" }
            } else {
                div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                    for listing in results {
                        ListingCard {
                            key: "{listing.id}",
                            pinned: highlights.is_pinned(&listing.id),
                            listing,
                            on_toggle,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterSelect(
    label: &'static str,
    placeholder: &'static str,
    options: Vec<String>,
    selected: Option<String>,
    field: FilterField,
) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current = selected.unwrap_or_default();

    rsx! {
        div { class: "min-w-[160px] flex-1",
            label { class: theme::LABEL, "{label}:" }
            select {
                class: theme::SELECT,
                value: "{current}",
                onchange: {
                    let mut state = state.clone();
                    move |evt: FormEvent| {
                        state.with_mut(|st| st.set_filter(field, &evt.value()));
                    }
                },
                option { value: "", "{placeholder}" }
                for value in options {
                    option { value: "{value}", selected: value == current, "{value}" }
                }
            }
        }
    }
}

#[component]
fn SortButton(order: SortOrder, current: SortOrder) -> Element {
    let state = use_context::<Signal<AppState>>();

    rsx! {
        button {
            class: theme::sort_button(order == current),
            onclick: {
                let mut state = state.clone();
                move |_| state.with_mut(|st| st.set_sort(order))
            },
            "Sort by {order.label()}"
        }
    }
}
