//! Active-section tracking.
//!
//! The tracker never reads the DOM itself; the caller passes the scroll
//! offset and a lookup for section geometry. Sections the lookup cannot find
//! are skipped.

use crate::CoreError;
use tracing::debug;

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= y < top + height`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Tracks which section the reader is looking at.
#[derive(Clone, Debug)]
pub struct ScrollSpy {
    ids: Vec<&'static str>,
    active: usize,
    lookahead: f64,
}

impl ScrollSpy {
    /// Starts with the first id active.
    pub fn new(ids: Vec<&'static str>, lookahead: f64) -> Result<Self, CoreError> {
        if ids.is_empty() {
            return Err(CoreError::NoSections);
        }
        Ok(Self {
            ids,
            active: 0,
            lookahead,
        })
    }

    pub fn active(&self) -> &'static str {
        self.ids[self.active]
    }

    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }

    /// Re-evaluate against `scroll_offset`. Returns `true` when the active
    /// section changed.
    ///
    /// The probe sits `lookahead` pixels below the offset; the first section
    /// in declaration order that contains it wins. When nothing contains the
    /// probe the previous section stays active.
    pub fn observe<F>(&mut self, scroll_offset: f64, mut bounds_of: F) -> bool
    where
        F: FnMut(&str) -> Option<SectionBounds>,
    {
        let probe = scroll_offset + self.lookahead;
        let hit = self.ids.iter().position(|id| {
            bounds_of(*id).is_some_and(|bounds| bounds.contains(probe))
        });

        match hit {
            Some(index) if index != self.active => {
                debug!(from = self.active(), to = self.ids[index], probe, "active section changed");
                self.active = index;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const IDS: [&str; 3] = ["home", "about", "contact"];

    fn stacked(id: &str) -> Option<SectionBounds> {
        match id {
            "home" => Some(SectionBounds::new(0.0, 600.0)),
            "about" => Some(SectionBounds::new(600.0, 800.0)),
            "contact" => Some(SectionBounds::new(1400.0, 500.0)),
            _ => None,
        }
    }

    fn spy() -> ScrollSpy {
        ScrollSpy::new(IDS.to_vec(), 100.0).unwrap()
    }

    #[test]
    fn empty_id_list_is_rejected() {
        assert_eq!(ScrollSpy::new(vec![], 100.0).unwrap_err(), CoreError::NoSections);
    }

    #[test]
    fn starts_on_first_section() {
        assert_eq!(spy().active(), "home");
    }

    #[test]
    fn offset_inside_single_section_selects_it() {
        let mut spy = spy();
        let cases = [
            (0.0, "home"),
            (499.0, "home"),
            (500.0, "about"),
            (1299.0, "about"),
            (1300.0, "contact"),
            (1799.0, "contact"),
        ];
        for (offset, expected) in cases {
            spy.observe(offset, stacked);
            assert_eq!(spy.active(), expected, "offset {offset}");
        }
    }

    #[test]
    fn overlapping_sections_resolve_in_declaration_order() {
        let overlapping = |id: &str| match id {
            "home" => Some(SectionBounds::new(0.0, 1000.0)),
            "about" => Some(SectionBounds::new(400.0, 1000.0)),
            "contact" => Some(SectionBounds::new(400.0, 1000.0)),
            _ => None,
        };
        let mut spy = spy();
        spy.observe(500.0, overlapping);
        assert_eq!(spy.active(), "home");

        spy.observe(950.0, overlapping);
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut spy = spy();
        assert!(spy.observe(700.0, stacked));
        assert_eq!(spy.active(), "about");

        assert!(!spy.observe(5000.0, stacked));
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn missing_sections_are_skipped() {
        let partial = |id: &str| match id {
            "contact" => Some(SectionBounds::new(0.0, 2000.0)),
            _ => None,
        };
        let mut spy = spy();
        assert!(spy.observe(0.0, partial));
        assert_eq!(spy.active(), "contact");
    }

    #[test]
    fn reports_change_only_once() {
        let mut spy = spy();
        assert!(spy.observe(600.0, stacked));
        assert!(!spy.observe(650.0, stacked));
    }

    #[test]
    fn lookahead_is_configurable() {
        let mut spy = ScrollSpy::new(IDS.to_vec(), 0.0).unwrap();
        spy.observe(550.0, stacked);
        assert_eq!(spy.active(), "home");
    }
}
