use dioxus::prelude::*;

use crate::domain::Listing;
use crate::ui::theme;

/// One card in the listing grid or the highlighted section.
///
/// The action label derives strictly from `pinned`; there is no separate
/// "button state" to drift out of sync with the highlight set.
#[component]
pub fn ListingCard(listing: Listing, pinned: bool, on_toggle: EventHandler<Listing>) -> Element {
    let action_label = if pinned { "Remove Highlight" } else { "Highlight" };
    let action_class = if pinned {
        theme::BTN_DANGER
    } else {
        theme::BTN_PRIMARY
    };
    let card_class = if pinned {
        "flex flex-col overflow-hidden rounded-xl border border-indigo-500/40 bg-slate-900/60"
    } else {
        "flex flex-col overflow-hidden rounded-xl border border-slate-800 bg-slate-900/40"
    };
    let toggled = listing.clone();

    rsx! {
        div { class: "{card_class}",
            if !listing.image_url.is_empty() {
                img {
                    class: "h-40 w-full object-cover",
                    src: "{listing.image_url}",
                    alt: "{listing.name}",
                }
            }
            div { class: "flex flex-1 flex-col gap-1 p-4",
                h3 { class: "text-sm font-semibold text-slate-100", "{listing.name}" }
                p { class: "text-sm text-slate-300", "Price: {listing.price}" }
                p { class: "text-sm text-slate-300", "Year: {listing.year}" }
                p { class: "text-sm text-slate-300", "Status: {listing.status}" }
                p { class: "text-sm text-slate-300", "Brand: {listing.brand}" }
                if !listing.province.is_empty() {
                    p { class: "{theme::TEXT_MUTED}", "{listing.province}" }
                }
                div { class: "mt-auto pt-3",
                    button {
                        class: "{action_class} w-full",
                        onclick: move |_| on_toggle.call(toggled.clone()),
                        "{action_label}"
                    }
                }
            }
        }
    }
}
