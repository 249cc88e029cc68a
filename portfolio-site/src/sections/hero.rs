use crate::browser;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio_core::content::PROFILE;

/// Smooth-scroll to `id`. Hero buttons leave the menu alone.
fn scroll_to(id: &'static str) -> impl Fn(MouseEvent) {
    move |ev: MouseEvent| {
        ev.prevent_default();
        browser::navigate_to(id);
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center bg-slate-900 text-white pt-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="max-w-4xl">
                    <h1 class="text-5xl md:text-6xl font-bold mb-4">{PROFILE.name}</h1>
                    <p class="text-2xl font-semibold mb-2 text-slate-300">{PROFILE.role}</p>
                    <p class="text-lg mb-6 text-slate-400">{PROFILE.credentials}</p>
                    <p class="text-lg mb-8 text-slate-300 leading-relaxed">{PROFILE.summary}</p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <a
                            href="#portfolio"
                            on:click=scroll_to("portfolio")
                            class="px-8 py-3 bg-white text-slate-900 rounded-lg font-semibold hover:bg-slate-100 transition-colors text-center"
                        >
                            "View My Work"
                        </a>
                        <a
                            href="#contact"
                            on:click=scroll_to("contact")
                            class="px-8 py-3 border-2 border-white text-white rounded-lg font-semibold hover:bg-white hover:text-slate-900 transition-colors text-center"
                        >
                            "Let's Connect"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
