//! Reactive hooks binding the `portfolio_core` state machines to the page.
//!
//! Each hook owns its browser resources (listeners, timers, frames,
//! observers) and releases them when the calling component is disposed.
//! Deferred callbacks only touch signals through `try_*` accessors, so a
//! late callback after disposal does nothing.

use crate::browser::{self, BrowserScheduler, FrameHandle, IntersectionWatch};
use leptos::html;
use leptos::prelude::*;
use portfolio_core::count_up::{CountUp, Start};
use portfolio_core::debounce::Debouncer;
use portfolio_core::intersection::IntersectionTrigger;
use portfolio_core::navigation::ScrollShadow;
use portfolio_core::scroll_spy::ScrollSpy;
use portfolio_core::{Deferred, SiteConfig};
use std::time::Duration;
use tracing::warn;

/// Site configuration from context, defaults when none was provided.
pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Run `evaluate` once after mount and then debounced on every scroll.
fn on_debounced_scroll(delay: Duration, evaluate: impl Fn() + Clone + 'static) {
    let debounced = evaluate.clone();
    let debouncer = StoredValue::new_local(Debouncer::new(BrowserScheduler, delay, move |()| {
        debounced()
    }));

    Effect::new(move || evaluate());

    let listener = browser::on_scroll(move || {
        debouncer.try_with_value(|debouncer| debouncer.call(()));
    });
    on_cleanup(move || listener.remove());
}

/// Id of the section currently under the scroll probe.
pub fn use_scroll_spy(ids: Vec<&'static str>) -> ReadSignal<&'static str> {
    let config = use_config();
    let (active, set_active) = signal(ids.first().copied().unwrap_or_default());

    let spy = match ScrollSpy::new(ids, config.scroll_lookahead) {
        Ok(spy) => StoredValue::new(spy),
        Err(err) => {
            warn!(%err, "scroll spy disabled");
            return active;
        }
    };

    on_debounced_scroll(config.scroll_debounce, move || {
        let offset = browser::scroll_offset();
        let changed = spy.try_update_value(|spy| {
            spy.observe(offset, browser::section_bounds)
                .then(|| spy.active())
        });
        if let Some(Some(id)) = changed {
            set_active.set(id);
        }
    });

    active
}

/// `true` once the page is scrolled past the navbar shadow offset.
pub fn use_scroll_shadow() -> ReadSignal<bool> {
    let config = use_config();
    let shadow = ScrollShadow::new(config.shadow_offset);
    let (raised, set_raised) = signal(false);

    on_debounced_scroll(config.scroll_debounce, move || {
        set_raised.set(shadow.is_raised(browser::scroll_offset()));
    });

    raised
}

/// Call `on_visible` whenever at least `threshold` of `target` is visible.
///
/// Without `IntersectionObserver` support `on_visible` runs right away.
pub fn use_intersection(
    target: NodeRef<html::Div>,
    threshold: f64,
    on_visible: impl Fn() + Clone + 'static,
) {
    let trigger = match IntersectionTrigger::new(threshold) {
        Ok(trigger) => trigger,
        Err(err) => {
            warn!(%err, "intersection trigger disabled");
            on_visible();
            return;
        }
    };
    let watch = StoredValue::new_local(None::<IntersectionWatch>);

    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        let notify = on_visible.clone();
        let mut trigger = trigger;
        let observed =
            browser::observe_intersection(&element, threshold, move |fraction, intersecting| {
                if trigger.observe_crossing(fraction, intersecting) {
                    notify();
                }
            });
        match observed {
            Ok(observer) => watch.set_value(Some(observer)),
            Err(err) => {
                warn!(%err, "intersection observer unavailable");
                on_visible();
            }
        }
    });
}

/// Animated value counting from 0 to `target` once `run` turns true.
pub fn use_count_up(target: u32, run: ReadSignal<bool>) -> ReadSignal<u32> {
    let config = use_config();
    let (value, set_value) = signal(0u32);
    let animation = StoredValue::new(CountUp::new(target, config.count_up_duration));
    let frame = StoredValue::new(None::<FrameHandle>);

    Effect::new(move || {
        if !run.get() {
            return;
        }
        let started = animation.try_update_value(|count| {
            count.start(browser::now_ms(), browser::prefers_reduced_motion())
        });
        match started {
            Some(Start::Animating) => next_frame(animation, set_value, frame, target),
            Some(Start::Settled(settled)) => set_value.set(settled),
            Some(Start::Ignored) | None => {}
        }
    });

    on_cleanup(move || {
        if let Some(Some(handle)) = frame.try_get_value() {
            handle.cancel();
        }
    });

    value
}

fn next_frame(
    animation: StoredValue<CountUp>,
    value: WriteSignal<u32>,
    frame: StoredValue<Option<FrameHandle>>,
    target: u32,
) {
    let requested = browser::request_frame(move || {
        let Some(tick) = animation.try_update_value(|count| count.tick(browser::now_ms())) else {
            return;
        };
        if value.try_set(tick.value).is_some() {
            return;
        }
        if !tick.done {
            next_frame(animation, value, frame, target);
        }
    });

    match requested {
        Ok(handle) => {
            frame.try_update_value(|slot| *slot = Some(handle));
        }
        Err(err) => {
            warn!(%err, "animation frames unavailable, showing final value");
            let _ = value.try_set(target);
        }
    }
}
