use crate::browser;
use crate::components::Icon;
use crate::reactive::use_scroll_shadow;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio_core::content::{IconKind, NAV_ITEMS, PROFILE};
use portfolio_core::navigation::MenuState;

/// Scroll to `id` and close the mobile menu.
fn follow_link(id: &'static str, menu: RwSignal<MenuState>) -> impl Fn(MouseEvent) + Clone {
    move |ev: MouseEvent| {
        ev.prevent_default();
        browser::navigate_to(id);
        menu.update(MenuState::navigate);
    }
}

#[component]
pub fn Navbar(active: ReadSignal<&'static str>, menu: RwSignal<MenuState>) -> impl IntoView {
    let raised = use_scroll_shadow();

    let bar_class = move || {
        if raised.get() {
            "fixed top-0 w-full z-50 transition-all duration-300 bg-white shadow-lg"
        } else {
            "fixed top-0 w-full z-50 transition-all duration-300 bg-white/95 backdrop-blur-md"
        }
    };

    let desktop_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let id = item.id;
            let is_active = move || active.get() == id;
            view! {
                <a
                    href=item.href()
                    on:click=follow_link(id, menu)
                    class=move || {
                        if is_active() {
                            "text-sm font-medium transition-all duration-200 relative py-2 text-slate-900"
                        } else {
                            "text-sm font-medium transition-all duration-200 relative py-2 text-slate-600 hover:text-slate-900"
                        }
                    }
                    aria-current=move || is_active().then_some("page")
                >
                    {item.label}
                    {move || {
                        is_active()
                            .then(|| view! { <span class="absolute bottom-0 left-0 w-full h-0.5 bg-slate-900"></span> })
                    }}
                </a>
            }
        })
        .collect_view();

    let mobile_panel = move || {
        menu.get().is_open().then(|| {
            let links = NAV_ITEMS
                .iter()
                .map(|item| {
                    let id = item.id;
                    view! {
                        <a
                            href=item.href()
                            on:click=follow_link(id, menu)
                            class=move || {
                                if active.get() == id {
                                    "block w-full text-left px-3 py-2 rounded-lg text-sm font-medium transition-colors text-slate-900 bg-slate-100"
                                } else {
                                    "block w-full text-left px-3 py-2 rounded-lg text-sm font-medium transition-colors text-slate-600 hover:text-slate-900 hover:bg-slate-50"
                                }
                            }
                        >
                            {item.label}
                        </a>
                    }
                })
                .collect_view();
            view! {
                <div id="mobile-menu" class="md:hidden bg-white border-t border-slate-200 shadow-lg">
                    <div class="px-4 py-2 space-y-1">{links}</div>
                </div>
            }
        })
    };

    view! {
        <nav class=bar_class role="navigation" aria-label="Primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <a href="#home" on:click=follow_link("home", menu) class="font-bold text-xl text-slate-900">
                            {PROFILE.brand}
                        </a>
                    </div>
                    <div class="hidden md:flex items-center space-x-8">{desktop_links}</div>
                    <div class="md:hidden">
                        <button
                            type="button"
                            on:click=move |_| menu.update(MenuState::toggle)
                            class="p-2 rounded-lg hover:bg-slate-100 transition-colors"
                            aria-label=move || menu.get().toggle_label()
                            aria-expanded=move || menu.get().is_open().to_string()
                            aria-controls="mobile-menu"
                        >
                            {move || {
                                let kind = if menu.get().is_open() { IconKind::Close } else { IconKind::Menu };
                                view! { <Icon kind=kind class="w-6 h-6 text-slate-900" /> }
                            }}
                        </button>
                    </div>
                </div>
            </div>
            {mobile_panel}
        </nav>
    }
}
