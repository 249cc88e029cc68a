use crate::components::{Icon, SectionTitle};
use leptos::prelude::*;
use portfolio_core::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    let cards = SERVICES
        .iter()
        .map(|service| {
            view! {
                <div class="bg-white border border-slate-200 rounded-xl p-6 hover:shadow-xl transition-all duration-300 hover:-translate-y-1">
                    <div class="w-12 h-12 bg-slate-900 text-white rounded-lg flex items-center justify-center mb-4">
                        <Icon kind=service.icon />
                    </div>
                    <h3 class="text-xl font-bold text-slate-900 mb-3">{service.title}</h3>
                    <p class="text-slate-600 leading-relaxed">{service.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="services" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle
                    title="Services"
                    subtitle="Comprehensive product management solutions to drive your business forward"
                />
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8">{cards}</div>
            </div>
        </section>
    }
}
