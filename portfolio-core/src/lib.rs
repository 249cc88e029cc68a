//! # portfolio-core
//!
//! Content model and UI state machines behind the portfolio site.
//!
//! Nothing in this crate touches the DOM. Every reactive behavior of the page
//! is a small state machine fed with explicit inputs (scroll offsets, visible
//! fractions, timestamps), so it can be exercised from plain unit tests and
//! driven from the browser by `portfolio-site`.
//!
//! ## Modules
//!
//! - [`content`] - Static biographical content (nav items, stats, services, ...)
//! - [`config`] - Tunable timing and geometry constants
//! - [`schedule`] - Cancelable deferred operations and the [`Scheduler`] seam
//! - [`debounce`] - Collapses bursts of calls into one trailing invocation
//! - [`scroll_spy`] - Active-section tracking from the scroll offset
//! - [`intersection`] - Visibility threshold trigger
//! - [`count_up`] - Eased 0 → target number animation
//! - [`navigation`] - Mobile menu state and navbar shadow
//! - [`contact`] - Contact form state machine and transports
//! - [`schema`] - schema.org JSON-LD for the profile
//!
//! ## Example
//!
//! ```rust
//! use portfolio_core::{content, scroll_spy::{ScrollSpy, SectionBounds}};
//!
//! let mut spy = ScrollSpy::new(content::nav_ids(), 100.0).unwrap();
//! let changed = spy.observe(700.0, |id| match id {
//!     "home" => Some(SectionBounds::new(0.0, 800.0)),
//!     "about" => Some(SectionBounds::new(800.0, 900.0)),
//!     _ => None,
//! });
//! assert!(changed);
//! assert_eq!(spy.active(), "about");
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod count_up;
pub mod debounce;
mod error;
pub mod intersection;
pub mod navigation;
pub mod schedule;
pub mod schema;
pub mod scroll_spy;

pub use config::SiteConfig;
pub use error::CoreError;
pub use schedule::{Deferred, Scheduler};
