use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use portfolio_core::content::PROFILE;
use portfolio_core::schema;
use tracing::warn;

/// Document title, description and the schema.org `Person` block.
#[component]
pub fn SeoMeta() -> impl IntoView {
    let title = format!("{} | {}", PROFILE.name, PROFILE.role);
    let json_ld = match schema::person_json_ld() {
        Ok(json) => Some(json),
        Err(err) => {
            warn!(%err, "structured data skipped");
            None
        }
    };

    view! {
        <Title text=title />
        <Meta name="description" content=PROFILE.tagline />
        {json_ld.map(|json| view! { <script type="application/ld+json" inner_html=json></script> })}
    }
}
