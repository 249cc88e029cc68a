use leptos::prelude::*;

/// Centered section heading with an optional one-line subtitle.
#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-4xl font-bold text-slate-900 mb-4">{title}</h2>
            {subtitle.map(|text| view! { <p class="text-lg text-slate-600 max-w-2xl mx-auto">{text}</p> })}
        </div>
    }
}
