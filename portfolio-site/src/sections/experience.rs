use crate::components::SectionTitle;
use leptos::prelude::*;
use portfolio_core::content::{EXPERIENCES, ExperienceEntry};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle
                    title="Professional Experience"
                    subtitle="My journey in product management across EdTech and AgTech"
                />
                <div class="max-w-4xl mx-auto space-y-8">
                    {EXPERIENCES.iter().map(|entry| view! { <Position entry=*entry /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Position(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <article class="bg-white rounded-xl shadow-lg p-8">
            <h3 class="text-2xl font-bold text-slate-900 mb-2">{entry.title}</h3>
            <div class="text-lg font-semibold text-slate-700 mb-1">
                {format!("{} - {}", entry.company, entry.location)}
            </div>
            <div class="text-sm text-slate-500 mb-4">{entry.duration}</div>
            <ul class="space-y-3 list-disc pl-5">
                {entry
                    .achievements
                    .iter()
                    .map(|line| view! { <li class="text-slate-600 leading-relaxed">{*line}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}
