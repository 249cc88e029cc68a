use crate::components::{Icon, SectionTitle};
use leptos::prelude::*;
use portfolio_core::content::{PORTFOLIO_ITEMS, PortfolioItem};

#[component]
pub fn PortfolioGrid() -> impl IntoView {
    view! {
        <section id="portfolio" class="py-20 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Portfolio" subtitle="Key projects and outcomes" />
                <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-6 lg:gap-8">
                    {PORTFOLIO_ITEMS.iter().map(|item| view! { <ProjectCard item=*item /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(item: PortfolioItem) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg overflow-hidden hover:shadow-xl transition-all duration-300 hover:-translate-y-1 flex flex-col">
            <div class="h-40 bg-slate-900 flex items-center justify-center text-white">
                <Icon kind=item.icon class="w-10 h-10" />
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <h3 class="text-xl font-bold text-slate-900 mb-2">{item.title}</h3>
                <p class="text-sm text-slate-500 mb-3">{item.company}</p>
                <p class="text-slate-600 mb-4 flex-1">{item.description}</p>
                <div class="flex flex-wrap gap-2">
                    {item
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 bg-slate-100 text-slate-700 rounded-full text-xs font-medium">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
