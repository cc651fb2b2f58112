//! Shared style classes so pages and components stay visually consistent.

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400";

pub const BTN_DANGER: &str =
    "rounded-lg bg-rose-600 px-4 py-2 text-sm font-semibold text-white hover:bg-rose-500";

pub const BTN_ACTIVE: &str =
    "rounded-lg px-5 py-2.5 text-sm font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40";

pub const BTN_INACTIVE: &str =
    "rounded-lg px-5 py-2.5 text-sm text-slate-400 border border-slate-700 hover:border-slate-600 hover:text-slate-200";

pub const SELECT: &str =
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";

pub const LABEL: &str = "block text-xs font-semibold uppercase tracking-wide text-slate-500";

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";

pub const TEXT_MUTED: &str = "text-xs text-slate-500";

pub fn sort_button(active: bool) -> &'static str {
    if active {
        BTN_ACTIVE
    } else {
        BTN_INACTIVE
    }
}
