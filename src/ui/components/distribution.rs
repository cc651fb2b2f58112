use dioxus::prelude::*;

use crate::ui::theme;

/// One bar in a proportional distribution list.
#[derive(Clone, PartialEq)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
}

/// Horizontal proportional bars standing in for the source's pie/stacked-bar
/// charts; same data, no chart library.
#[component]
pub fn DistributionBars(title: String, entries: Vec<DistributionEntry>) -> Element {
    let max = entries.iter().map(|entry| entry.count).max().unwrap_or(0);

    rsx! {
        div { class: "{theme::PANEL} p-4",
            h3 { class: "mb-3 text-sm font-semibold text-slate-200", "{title}" }
            if entries.is_empty() {
                p { class: "text-sm text-slate-400", "Nothing to chart yet." }
            } else {
                ul { class: "space-y-2",
                    for entry in entries {
                        li {
                            div { class: "flex items-center justify-between text-xs text-slate-400",
                                span { "{entry.label}" }
                                span { "{entry.count}" }
                            }
                            div { class: "mt-1 h-2 w-full rounded bg-slate-800",
                                div {
                                    class: "h-2 rounded bg-indigo-500",
                                    style: format!("width: {:.1}%", bar_width(entry.count, max)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn bar_width(count: usize, max: usize) -> f64 {
    if max == 0 {
        0.0
    } else {
        count as f64 / max as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::bar_width;

    #[test]
    fn widths_scale_against_the_largest_group() {
        assert_eq!(bar_width(5, 10), 50.0);
        assert_eq!(bar_width(10, 10), 100.0);
    }

    #[test]
    fn empty_distribution_renders_zero_width() {
        assert_eq!(bar_width(0, 0), 0.0);
    }
}
