//! Portfolio page, rendered client-side with Leptos.
//!
//! `portfolio_core` holds the content and the UI state machines; this crate
//! binds them to the DOM. [`App`] is the root view, mounted by `main.rs`.

pub mod browser;
pub mod components;
mod error;
pub mod logging;
pub mod reactive;
pub mod sections;

pub use error::SiteError;

use leptos::html;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use portfolio_core::SiteConfig;
use portfolio_core::content;
use portfolio_core::navigation::MenuState;
use reactive::{use_intersection, use_scroll_spy};
use sections::*;

/// Root view. Owns the menu state, the active section and the stats trigger.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = SiteConfig::default();
    provide_context(config);

    let menu = RwSignal::new(MenuState::default());
    let active = use_scroll_spy(content::nav_ids());

    let stats_ref = NodeRef::<html::Div>::new();
    let (stats_run, set_stats_run) = signal(false);
    use_intersection(stats_ref, config.stats_threshold, move || set_stats_run.set(true));

    view! {
        <SeoMeta />
        <div class="min-h-screen bg-white">
            <Navbar active=active menu=menu />
            <main>
                <Hero />
                <About stats_ref=stats_ref stats_run=stats_run />
                <Experience />
                <Services />
                <PortfolioGrid />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
