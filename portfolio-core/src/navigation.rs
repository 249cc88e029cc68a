//! Navbar state: mobile menu and scroll shadow.

use tracing::debug;

/// Mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        debug!(menu = ?self, "menu toggled");
    }

    /// A nav link was activated; the panel closes as a side effect.
    pub fn navigate(&mut self) {
        *self = MenuState::Closed;
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open menu",
            MenuState::Open => "Close menu",
        }
    }
}

/// Whether the navbar should be drawn raised (opaque with shadow).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollShadow {
    offset: f64,
}

impl ScrollShadow {
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }

    pub fn is_raised(&self, scroll_offset: f64) -> bool {
        scroll_offset > self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert_eq!(MenuState::default().toggle_label(), "Open menu");
    }

    #[test]
    fn toggle_flips() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.toggle_label(), "Close menu");
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn navigate_closes_open_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.navigate();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn navigating_with_closed_menu_keeps_it_closed() {
        let mut menu = MenuState::Closed;
        menu.navigate();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn shadow_raises_strictly_past_offset() {
        let shadow = ScrollShadow::new(50.0);
        assert!(!shadow.is_raised(0.0));
        assert!(!shadow.is_raised(50.0));
        assert!(shadow.is_raised(50.5));
    }
}
