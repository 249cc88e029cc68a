use crate::components::{AnimatedStat, Icon, SectionTitle};
use leptos::html;
use leptos::prelude::*;
use portfolio_core::content::{IconKind, PROFILE, SKILLS, STATS};

/// Bio, animated stats and skill tags.
///
/// `stats_ref` is observed by the root view; `stats_run` flips once the
/// stats grid is visible enough to start the count-up.
#[component]
pub fn About(stats_ref: NodeRef<html::Div>, stats_run: ReadSignal<bool>) -> impl IntoView {
    let paragraphs = PROFILE
        .about
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let class = if i + 1 == PROFILE.about.len() { "text-slate-600 mb-8" } else { "text-slate-600 mb-4" };
            view! { <p class=class>{*text}</p> }
        })
        .collect_view();

    view! {
        <section id="about" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle
                    title="About Me"
                    subtitle="Discover my journey in product management and passion for creating impactful digital solutions"
                />
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h3 class="text-2xl font-bold text-slate-900 mb-4">{PROFILE.headline}</h3>
                        {paragraphs}
                        <div node_ref=stats_ref class="grid grid-cols-2 gap-4 mb-8">
                            {STATS
                                .iter()
                                .map(|stat| view! { <AnimatedStat stat=*stat run=stats_run /> })
                                .collect_view()}
                        </div>
                        <div class="flex flex-wrap gap-2">
                            {SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <span class="px-4 py-2 bg-slate-900 text-white rounded-full text-sm font-medium">
                                            {*skill}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="bg-slate-100 rounded-2xl h-96 flex items-center justify-center">
                        <div class="text-center text-slate-500">
                            <Icon kind=IconKind::Briefcase class="w-16 h-16 mx-auto mb-4" />
                            <p class="text-lg">"Professional Photo"</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
