use thiserror::Error;

/// Errors raised while constructing the page's state machines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Visibility thresholds are fractions of the element area.
    #[error("visibility threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
    /// A scroll-spy needs a section to start from.
    #[error("scroll spy needs at least one section id")]
    NoSections,
}
