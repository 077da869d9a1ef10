//! Navigation bar behavior that does not need a DOM: page-name matching,
//! anchor resolution, menu state and the scroll elevation rule.

use crate::config::NavbarConfig;

pub const ACTIVE_CLASS: &str = "active";

/// Last path segment of `pathname`, or `root_page` when it is empty
/// (`/`, `/blog/`, or an empty path).
pub fn current_page_name<'a>(pathname: &'a str, root_page: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(seg) if !seg.is_empty() => seg,
        _ => root_page,
    }
}

/// Whether a navigation link with `href` points at the current page.
pub fn is_active_link(href: Option<&str>, current: &str, root_page: &str) -> bool {
    let Some(href) = href else {
        return false;
    };
    href == current || (current.is_empty() && href == root_page)
}

/// Id referenced by a same-page anchor. The bare `#` references nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleClicked,
    MenuLinkClicked,
    /// A document click whose target is inside the toggle or the menu.
    ClickedInside,
    ClickedOutside,
}

impl MenuState {
    pub fn from_active(active: bool) -> Self {
        if active {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn after(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::ToggleClicked => match self {
                MenuState::Open => MenuState::Closed,
                MenuState::Closed => MenuState::Open,
            },
            MenuEvent::MenuLinkClicked | MenuEvent::ClickedOutside => MenuState::Closed,
            MenuEvent::ClickedInside => self,
        }
    }
}

/// Inline `box-shadow` for the navbar at vertical scroll offset `scroll_y`.
pub fn navbar_shadow(scroll_y: f64, cfg: &NavbarConfig) -> &str {
    if scroll_y > cfg.elevate_after_px {
        &cfg.elevated_shadow
    } else {
        &cfg.resting_shadow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "index.html";

    #[test]
    fn page_name_from_path() {
        assert_eq!(current_page_name("/projects.html", ROOT), "projects.html");
        assert_eq!(current_page_name("/de/kontakt.html", ROOT), "kontakt.html");
        assert_eq!(current_page_name("/", ROOT), ROOT);
        assert_eq!(current_page_name("/blog/", ROOT), ROOT);
        assert_eq!(current_page_name("", ROOT), ROOT);
    }

    #[test]
    fn exactly_the_matching_link_is_active() {
        let links = [Some("index.html"), Some("projects.html"), Some("contact.html"), None];
        let active: Vec<_> = links
            .iter()
            .filter(|h| is_active_link(**h, "projects.html", ROOT))
            .collect();
        assert_eq!(active, vec![&Some("projects.html")]);
    }

    #[test]
    fn empty_current_name_matches_root_page() {
        assert!(is_active_link(Some("index.html"), "", ROOT));
        assert!(!is_active_link(Some("projects.html"), "", ROOT));
        assert!(is_active_link(Some("home.html"), "", "home.html"));
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("contact.html#form"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn menu_transitions() {
        let closed = MenuState::Closed;
        let open = closed.after(MenuEvent::ToggleClicked);
        assert!(open.is_open());
        assert_eq!(open.after(MenuEvent::ToggleClicked), MenuState::Closed);
        assert_eq!(open.after(MenuEvent::MenuLinkClicked), MenuState::Closed);
        assert_eq!(open.after(MenuEvent::ClickedOutside), MenuState::Closed);
        assert_eq!(open.after(MenuEvent::ClickedInside), MenuState::Open);
        assert_eq!(closed.after(MenuEvent::ClickedOutside), MenuState::Closed);
        assert_eq!(MenuState::from_active(true), MenuState::Open);
    }

    #[test]
    fn shadow_deepens_past_threshold() {
        let cfg = NavbarConfig::default();
        assert_eq!(navbar_shadow(0.0, &cfg), "0 2px 10px rgba(0, 0, 0, 0.1)");
        assert_eq!(navbar_shadow(50.0, &cfg), "0 2px 10px rgba(0, 0, 0, 0.1)");
        assert_eq!(navbar_shadow(50.5, &cfg), "0 4px 15px rgba(0, 0, 0, 0.15)");
    }
}
