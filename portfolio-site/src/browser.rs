//! Browser capabilities the page consumes.
//!
//! Thin wrappers over `web_sys` and the Leptos DOM helpers. Reads never fail
//! loudly: a missing window or element degrades to a neutral value so the
//! state machines in `portfolio_core` keep their previous state.

use crate::SiteError;
use leptos::ev;
use leptos::prelude::*;
use portfolio_core::scroll_spy::SectionBounds;
use portfolio_core::{Deferred, Scheduler};
use std::time::Duration;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// `window.scrollY`, or 0 when unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// `offsetTop`/`offsetHeight` of the element with `id`.
pub fn section_bounds(id: &str) -> Option<SectionBounds> {
    let element: HtmlElement = document().ok()?.get_element_by_id(id)?.dyn_into().ok()?;
    Some(SectionBounds::new(
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    ))
}

/// Smooth-scroll the section with `id` to the top of the viewport.
pub fn scroll_to_section(id: &str) -> Result<(), SiteError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingSection(id.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Like [`scroll_to_section`], but an unknown target is a silent no-op.
pub fn navigate_to(id: &str) {
    if let Err(err) = scroll_to_section(id) {
        debug!(%err, "navigation ignored");
    }
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

/// `performance.now()` in milliseconds.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    let shown = window()
        .and_then(|window| window.alert_with_message(message).map_err(SiteError::from));
    if let Err(err) = shown {
        warn!(%err, "alert failed");
    }
}

/// Subscribe to window scroll events. Remove the handle on teardown.
pub fn on_scroll(handler: impl Fn() + 'static) -> WindowListenerHandle {
    window_event_listener(ev::scroll, move |_| handler())
}

/// `setTimeout` as a [`Scheduler`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Pending `setTimeout`; empty when scheduling failed.
#[derive(Clone, Copy, Debug)]
pub struct TimerHandle(Option<TimeoutHandle>);

impl Deferred for TimerHandle {
    fn cancel(self) {
        if let Some(handle) = self.0 {
            handle.clear();
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = TimerHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => TimerHandle(Some(handle)),
            Err(err) => {
                warn!(err = ?err, "setTimeout failed");
                TimerHandle(None)
            }
        }
    }
}

/// Pending `requestAnimationFrame`.
#[derive(Clone, Copy, Debug)]
pub struct FrameHandle(AnimationFrameRequestHandle);

impl Deferred for FrameHandle {
    fn cancel(self) {
        self.0.cancel();
    }
}

pub fn request_frame(callback: impl FnOnce() + 'static) -> Result<FrameHandle, SiteError> {
    request_animation_frame_with_handle(callback)
        .map(FrameHandle)
        .map_err(SiteError::from)
}

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A live `IntersectionObserver`; disconnects when dropped.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: IntersectionCallback,
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `target`, reporting its visible fraction and whether it is
/// intersecting each time it crosses `threshold`.
pub fn observe_intersection(
    target: &Element,
    threshold: f64,
    mut on_report: impl FnMut(f64, bool) + 'static,
) -> Result<IntersectionWatch, SiteError> {
    let callback =
        IntersectionCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_report(entry.intersection_ratio(), entry.is_intersecting());
            }
        });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);

    Ok(IntersectionWatch {
        observer,
        _callback: callback,
    })
}
