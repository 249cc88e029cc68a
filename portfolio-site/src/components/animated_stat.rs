use crate::reactive::use_count_up;
use leptos::prelude::*;
use portfolio_core::content::StatEntry;

/// A headline number that counts up from 0 once `run` turns true.
#[component]
pub fn AnimatedStat(stat: StatEntry, run: ReadSignal<bool>) -> impl IntoView {
    let value = use_count_up(stat.value, run);
    let suffix = stat.suffix.unwrap_or_default();

    view! {
        <div class="bg-slate-50 p-6 rounded-xl text-center">
            <div class="text-3xl font-bold text-slate-900 mb-2">
                {move || format!("{}{suffix}", value.get())}
            </div>
            <div class="text-sm text-slate-600">{stat.label}</div>
        </div>
    }
}
