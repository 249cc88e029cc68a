use crate::browser;
use crate::components::Icon;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio_core::content::{CERTIFICATIONS, EXPERTISE, NAV_ITEMS, PROFILE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|social| {
            let external = social.is_external();
            view! {
                <a
                    href=social.href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    class="w-10 h-10 bg-slate-800 rounded-full flex items-center justify-center hover:bg-slate-700 transition-colors"
                    aria-label=social.label
                >
                    <Icon kind=social.icon class="w-4 h-4" />
                </a>
            }
        })
        .collect_view();

    let quick_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let id = item.id;
            view! {
                <li>
                    <a
                        href=item.href()
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            browser::navigate_to(id);
                        }
                        class="hover:text-white transition-colors"
                    >
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    let certificates = CERTIFICATIONS
        .iter()
        .map(|cert| {
            view! {
                <li>
                    <a
                        href=cert.url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center text-slate-400 hover:text-white transition-colors"
                    >
                        <Icon kind=cert.icon class="w-4 h-4 mr-2 flex-shrink-0" />
                        <span>{cert.title}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer class="bg-slate-950 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mb-8">
                    <div>
                        <h3 class="text-lg font-bold mb-4">{PROFILE.display_name}</h3>
                        <p class="text-slate-400 text-sm mb-4">{PROFILE.tagline}</p>
                        <div class="flex space-x-3">{socials}</div>
                    </div>
                    <div>
                        <h3 class="text-lg font-bold mb-4">"Expertise"</h3>
                        <ul class="space-y-2 text-sm text-slate-400">
                            {EXPERTISE.iter().map(|area| view! { <li>{*area}</li> }).collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-lg font-bold mb-4">"Quick Links"</h3>
                        <ul class="space-y-2 text-sm text-slate-400">{quick_links}</ul>
                    </div>
                    <div>
                        <h3 class="text-lg font-bold mb-4">"Certifications"</h3>
                        <ul class="space-y-2 text-sm">{certificates}</ul>
                    </div>
                </div>
                <div class="border-t border-slate-800 pt-8 text-center">
                    <p class="text-sm text-slate-400">
                        {format!("© {year} {}. All rights reserved.", PROFILE.display_name)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
