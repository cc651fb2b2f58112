use dioxus::prelude::*;

use crate::ui::theme;

/// One brand's block of model rows in the grouped table.
#[derive(Clone, PartialEq)]
pub struct StatsSection {
    pub brand: String,
    pub rows: Vec<StatsRow>,
}

#[derive(Clone, PartialEq)]
pub struct StatsRow {
    pub model: String,
    pub count: usize,
    pub total_value: u64,
    pub average: f64,
}

/// Grouped brand/model table: the brand cell renders only on the first row
/// of its group, matching the dashboard's source layout.
#[component]
pub fn StatsTable(title: String, sections: Vec<StatsSection>) -> Element {
    let is_empty = sections.iter().all(|section| section.rows.is_empty());

    rsx! {
        div { class: "{theme::PANEL}",
            header {
                class: "flex items-center justify-between border-b border-slate-800 px-4 py-3",
                h3 { class: "text-sm font-semibold text-slate-200", "{title}" }
            }
            if is_empty {
                p { class: "px-4 py-6 text-sm text-slate-400", "No listings loaded yet." }
            } else {
                table { class: "w-full text-left text-sm",
                    thead {
                        tr { class: "border-b border-slate-800 text-xs uppercase tracking-wide text-slate-500",
                            th { class: "px-4 py-2", "Brand" }
                            th { class: "px-4 py-2", "Model" }
                            th { class: "px-4 py-2 text-right", "Cars" }
                            th { class: "px-4 py-2 text-right", "Value (Baht)" }
                            th { class: "px-4 py-2 text-right", "Average Price" }
                        }
                    }
                    tbody {
                        for section in sections {
                            for (index, row) in section.rows.iter().enumerate() {
                                tr { class: "border-b border-slate-900/60 text-slate-300",
                                    td { class: "px-4 py-2 font-medium text-slate-100",
                                        if index == 0 { "{section.brand}" } else { "" }
                                    }
                                    td { class: "px-4 py-2", "{row.model}" }
                                    td { class: "px-4 py-2 text-right", "{row.count}" }
                                    td { class: "px-4 py-2 text-right", {format_amount(row.total_value)} }
                                    td { class: "px-4 py-2 text-right", {format!("{:.2}", row.average)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Thousands-separated rendering for table cells.
pub fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1_000), "1,000");
        assert_eq!(format_amount(1_300_000), "1,300,000");
    }
}
