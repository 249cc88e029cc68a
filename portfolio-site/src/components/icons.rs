//! Inline stroke icons (24x24 grid, Lucide style).
//!
//! Content refers to icons by [`IconKind`]; [`icon_path`] maps each tag to a
//! single path so every icon renders through the same [`Icon`] component.

use leptos::prelude::*;
use portfolio_core::content::IconKind;

/// Renders `kind` as an inline SVG that inherits the text color.
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Mail class="w-5 h-5" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Sizing and color classes
    #[prop(default = "w-6 h-6")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=icon_path(kind)></path>
        </svg>
    }
}

pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

pub const ICON_CLOSE: &str = "M18 6 6 18M6 6l12 12";

pub const ICON_MAIL: &str =
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 7l-10 6L2 7";

pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

pub const ICON_MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0zM12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z";

pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z";

pub const ICON_AWARD: &str =
    "M12 2a6 6 0 1 0 0 12 6 6 0 1 0 0-12zM8.21 13.89 7 23l5-3 5 3-1.21-9.12";

pub const ICON_TARGET: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20zM12 6a6 6 0 1 0 0 12 6 6 0 1 0 0-12zM12 10a2 2 0 1 0 0 4 2 2 0 1 0 0-4z";

pub const ICON_USERS: &str = "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";

pub const ICON_BAR_CHART: &str = "M12 20V10M18 20V4M6 20v-4";

pub const ICON_BOOK_OPEN: &str = "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z";

pub const ICON_GIT_BRANCH: &str = "M6 3v12M18 6a3 3 0 1 0 0 0.01M6 15a3 3 0 1 0 0 6 3 3 0 1 0 0-6zM18 9a9 9 0 0 1-9 9";

pub const ICON_FILE_TEXT: &str = "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 17H8M10 9H8";

pub const ICON_TWITTER: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z";

pub const ICON_CLOUD: &str = "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9z";

pub const ICON_BRAIN: &str = "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18zM12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18zM12 5v13";

pub const ICON_BRIEFCASE: &str =
    "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16";

pub const ICON_GLOBE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";

/// Path data for `kind`.
pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Menu => ICON_MENU,
        IconKind::Close => ICON_CLOSE,
        IconKind::Mail => ICON_MAIL,
        IconKind::Phone => ICON_PHONE,
        IconKind::MapPin => ICON_MAP_PIN,
        IconKind::LinkedIn => ICON_LINKEDIN,
        IconKind::Award => ICON_AWARD,
        IconKind::Target => ICON_TARGET,
        IconKind::Users => ICON_USERS,
        IconKind::BarChart => ICON_BAR_CHART,
        IconKind::BookOpen => ICON_BOOK_OPEN,
        IconKind::GitBranch => ICON_GIT_BRANCH,
        IconKind::FileText => ICON_FILE_TEXT,
        IconKind::Twitter => ICON_TWITTER,
        IconKind::Cloud => ICON_CLOUD,
        IconKind::Brain => ICON_BRAIN,
        IconKind::Briefcase => ICON_BRIEFCASE,
        IconKind::Globe => ICON_GLOBE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_icon_has_path_data() {
        for kind in IconKind::ALL {
            let path = icon_path(kind);
            assert!(path.starts_with('M'), "{kind:?} path must start with a moveto");
        }
    }

    #[test]
    fn icons_are_distinct() {
        let paths: HashSet<_> = IconKind::ALL.iter().map(|kind| icon_path(*kind)).collect();
        assert_eq!(paths.len(), IconKind::ALL.len());
    }
}
