use crate::browser::{self, BrowserScheduler, TimerHandle};
use crate::components::{Icon, SectionTitle};
use crate::reactive::use_config;
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use portfolio_core::Deferred;
use portfolio_core::contact::{
    ContactForm, ContactTransport, Field, FormError, FormPhase, SimulatedTransport,
    SubmitOutcome, TransportError,
};
use portfolio_core::content::{CONTACT_LINKS, ContactLink};
use tracing::debug;

const INPUT_CLASS: &str = "w-full px-4 py-2 bg-slate-700 border border-slate-600 rounded-lg focus:outline-none focus:border-white text-white";

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_config();
    let form = RwSignal::new(ContactForm::default());
    let transport = SimulatedTransport::new(BrowserScheduler, config.submit_latency);
    let in_flight = StoredValue::new(None::<TimerHandle>);

    on_cleanup(move || {
        if let Some(Some(handle)) = in_flight.try_get_value() {
            handle.cancel();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = match form.try_update(ContactForm::begin_submit) {
            Some(Ok(message)) => message,
            Some(Err(err)) => {
                debug!(%err, "submission refused");
                return;
            }
            None => return,
        };

        let handle = transport.send(
            message,
            Box::new(move |result: Result<(), TransportError>| {
                in_flight.try_update_value(|slot| *slot = None);
                if let Some(Some(SubmitOutcome::Sent { confirmation })) =
                    form.try_update(|form| form.finish(result))
                {
                    browser::alert(&confirmation);
                }
            }),
        );
        in_flight.set_value(Some(handle));
    };

    let notice = move || {
        form.with(|form| match (form.missing_field(), form.phase()) {
            (Some(field), _) => Some(FormError::MissingField(field).to_string()),
            (None, FormPhase::Failed { reason }) => Some(reason.clone()),
            _ => None,
        })
        .map(|text| view! { <p class="mb-4 text-sm text-red-400" role="alert">{text}</p> })
    };

    view! {
        <section id="contact" class="py-20 bg-slate-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle
                    title="Get In Touch"
                    subtitle="Let's discuss your product needs and move your roadmap forward"
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-bold mb-4">"Let's Work Together"</h3>
                        <p class="text-slate-300 mb-8">
                            "I help teams build exceptional products through clear strategy, user-centered design, and data-informed decisions."
                        </p>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            {CONTACT_LINKS.iter().map(|link| view! { <ContactCard link=*link /> }).collect_view()}
                        </div>
                    </div>

                    <form on:submit=on_submit class="bg-slate-800 rounded-xl p-8" novalidate>
                        <FieldInput field=Field::Name form=form />
                        <FieldInput field=Field::Email form=form />
                        <FieldInput field=Field::Subject form=form />
                        <FieldInput field=Field::Message form=form />
                        {notice}
                        <button
                            type="submit"
                            disabled=move || form.with(ContactForm::is_submitting)
                            class="w-full px-8 py-3 bg-white text-slate-900 rounded-lg font-semibold hover:bg-slate-100 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {move || form.with(ContactForm::submit_label)}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

/// Labelled input bound to one field of `form`.
#[component]
fn FieldInput(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|form| form.fields().get(field).to_string());
    let on_input = move |ev: Event| {
        let text = event_target_value(&ev);
        form.update(|form| form.update(field, text));
    };

    let control = match field {
        Field::Message => view! {
            <textarea
                id=field.id()
                rows="4"
                required
                prop:value=value
                on:input=on_input
                placeholder="Tell me about your product management needs..."
                class=format!("{INPUT_CLASS} placeholder-slate-400")
            ></textarea>
        }
        .into_any(),
        Field::Email => view! {
            <input type="email" id=field.id() required autocomplete="email" prop:value=value on:input=on_input class=INPUT_CLASS />
        }
        .into_any(),
        Field::Name => view! {
            <input type="text" id=field.id() required autocomplete="name" prop:value=value on:input=on_input class=INPUT_CLASS />
        }
        .into_any(),
        Field::Subject => view! {
            <input type="text" id=field.id() required prop:value=value on:input=on_input class=INPUT_CLASS />
        }
        .into_any(),
    };

    view! {
        <div class="mb-6">
            <label for=field.id() class="block text-sm font-medium mb-2">{field.label()}</label>
            {control}
        </div>
    }
}

/// Contact detail card; a link when `href` is set.
#[component]
fn ContactCard(link: ContactLink) -> impl IntoView {
    let body = view! {
        <Icon kind=link.icon class="w-5 h-5 mr-3 text-slate-400" />
        <div>
            <div class="font-semibold text-sm">{link.label}</div>
            <div class="text-slate-300 text-sm">{link.value}</div>
        </div>
    };

    match link.href {
        Some(href) => view! {
            <a
                href=href
                target=link.external.then_some("_blank")
                rel=link.external.then_some("noopener noreferrer")
                class="flex items-center p-3 bg-slate-800 rounded-lg hover:bg-slate-700 transition-colors"
            >
                {body}
            </a>
        }
        .into_any(),
        None => view! { <div class="flex items-center p-3 bg-slate-800 rounded-lg">{body}</div> }.into_any(),
    }
}
