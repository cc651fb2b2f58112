use dioxus::prelude::*;

use crate::{
    domain::{aggregate_brand_models, aggregate_brands, aggregate_models, AppState},
    ui::{
        components::{
            distribution::{DistributionBars, DistributionEntry},
            kpi_card::KpiCard,
            stats_table::{format_amount, StatsRow, StatsSection, StatsTable},
        },
        theme,
    },
};

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let listings = state.with(|st| st.listings.clone());
    let selected_brand = state.with(|st| st.selected_brand.clone());
    let load_error = state.with(|st| st.catalog.error.clone());

    let brand_stats = aggregate_brands(&listings);
    let total_count = listings.len();
    let total_value: u64 = brand_stats.values().map(|stats| stats.total_value).sum();
    let brand_count = brand_stats.len();

    // Grouped brand/model table, split in half by brand like the source
    // dashboard's two side-by-side tables.
    let nested = aggregate_brand_models(&listings);
    let sections: Vec<StatsSection> = nested
        .iter()
        .map(|(brand, models)| StatsSection {
            brand: brand.clone(),
            rows: models
                .iter()
                .map(|(model, stats)| StatsRow {
                    model: model.clone(),
                    count: stats.count,
                    total_value: stats.total_value,
                    average: stats.average(),
                })
                .collect(),
        })
        .collect();
    let half = sections.len().div_ceil(2);
    let (first_half, second_half) = sections.split_at(half);
    let first_half = first_half.to_vec();
    let second_half = second_half.to_vec();

    let brand_distribution: Vec<DistributionEntry> = brand_stats
        .iter()
        .map(|(brand, stats)| DistributionEntry {
            label: brand.clone(),
            count: stats.count,
        })
        .collect();

    let model_scope = selected_brand.as_deref();
    let model_distribution: Vec<DistributionEntry> = aggregate_models(&listings, model_scope)
        .iter()
        .map(|(model, stats)| DistributionEntry {
            label: model.clone(),
            count: stats.count,
        })
        .collect();
    let model_title = match &selected_brand {
        Some(brand) => format!("Car Distribution by Model — {brand}"),
        None => "Car Distribution by Model".to_string(),
    };

    let brand_names: Vec<String> = brand_stats.keys().cloned().collect();

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-2xl font-semibold text-slate-100", "Dashboard" }

            if let Some(error) = load_error {
                div {
                    class: "rounded-lg border border-rose-500/40 bg-rose-500/10 px-4 py-3 text-sm text-rose-200",
                    "{error}"
                }
            }

            section { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Listings",
                    value: "{total_count}",
                    description: None::<String>,
                }
                KpiCard {
                    title: "Catalog Value",
                    value: format_amount(total_value),
                    description: Some("Baht".to_string()),
                }
                KpiCard {
                    title: "Brands",
                    value: "{brand_count}",
                    description: None::<String>,
                }
            }

            section { class: "grid gap-6 lg:grid-cols-2",
                StatsTable { title: "Brands & Models", sections: first_half }
                StatsTable { title: "Brands & Models (cont.)", sections: second_half }
            }

            section { class: "space-y-3",
                div { class: "flex flex-wrap items-center gap-2",
                    span { class: "text-xs uppercase tracking-wide text-slate-400", "Brand:" }
                    button {
                        class: theme::sort_button(selected_brand.is_none()),
                        onclick: {
                            let mut state = state.clone();
                            move |_| state.with_mut(|st| st.select_brand(None))
                        },
                        "All"
                    }
                    for brand in brand_names {
                        BrandButton { brand, selected: selected_brand.clone() }
                    }
                }
                div { class: "grid gap-6 lg:grid-cols-2",
                    DistributionBars {
                        title: "Car Distribution by Brand",
                        entries: brand_distribution,
                    }
                    DistributionBars {
                        title: model_title,
                        entries: model_distribution,
                    }
                }
            }
        }
    }
}

#[component]
fn BrandButton(brand: String, selected: Option<String>) -> Element {
    let state = use_context::<Signal<AppState>>();
    let active = selected.as_deref() == Some(brand.as_str());
    let picked = brand.clone();

    rsx! {
        button {
            class: theme::sort_button(active),
            onclick: {
                let mut state = state.clone();
                move |_| state.with_mut(|st| st.select_brand(Some(picked.clone())))
            },
            "{brand}"
        }
    }
}
