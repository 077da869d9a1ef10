use savings_site::config::NavbarConfig;
use savings_site::navigation::{
    anchor_target, current_page_name, is_active_link, navbar_shadow, MenuEvent, MenuState,
    ACTIVE_CLASS,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, Node, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::dom::{has_class, listen, query, query_all, query_all_in, set_class};

pub(super) const TOGGLE_SELECTOR: &str = ".navbar-toggle";
pub(super) const MENU_SELECTOR: &str = ".navbar-menu";
pub(super) const MENU_LINKS_SELECTOR: &str = ".navbar-menu a";
pub(super) const NAVBAR_SELECTOR: &str = ".navbar";
pub(super) const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Clone)]
struct Menu {
    toggle: Element,
    menu: Element,
}

impl Menu {
    fn state(&self) -> MenuState {
        MenuState::from_active(has_class(&self.menu, ACTIVE_CLASS))
    }

    fn apply(&self, event: MenuEvent) {
        let current = self.state();
        let next = current.after(event);
        if next == current {
            return;
        }
        set_class(&self.toggle, ACTIVE_CLASS, next.is_open());
        set_class(&self.menu, ACTIVE_CLASS, next.is_open());
    }

    fn contains(&self, target: Option<&Node>) -> bool {
        self.toggle.contains(target) || self.menu.contains(target)
    }
}

pub(super) fn install_menu_toggle(document: &Document) {
    let menu = match (
        query::<Element>(document, TOGGLE_SELECTOR),
        query::<Element>(document, MENU_SELECTOR),
    ) {
        (Ok(toggle), Ok(menu)) => Menu { toggle, menu },
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!("menu toggle disabled: {e}");
            return;
        }
    };

    let m = menu.clone();
    if let Err(e) = listen(&menu.toggle, "click", move |_| m.apply(MenuEvent::ToggleClicked)) {
        tracing::warn!("menu toggle: {e}");
    }

    for link in query_all_in(&menu.menu, "a").unwrap_or_default() {
        let m = menu.clone();
        if let Err(e) = listen(&link, "click", move |_| m.apply(MenuEvent::MenuLinkClicked)) {
            tracing::warn!("menu link: {e}");
        }
    }

    let m = menu.clone();
    let on_document_click = move |ev: web_sys::Event| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let event = if m.contains(target.as_ref()) {
            MenuEvent::ClickedInside
        } else {
            MenuEvent::ClickedOutside
        };
        m.apply(event);
    };
    if let Err(e) = listen(document, "click", on_document_click) {
        tracing::warn!("menu outside click: {e}");
    }
}

/// Marks the navigation link that points at the current page.
pub(super) fn mark_active_link(document: &Document, root_page: &str) {
    let pathname = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let current = current_page_name(&pathname, root_page);

    let links = match query_all(document, MENU_LINKS_SELECTOR) {
        Ok(links) => links,
        Err(e) => {
            tracing::debug!("active link marking disabled: {e}");
            return;
        }
    };

    for link in links {
        let href = link.get_attribute("href");
        if is_active_link(href.as_deref(), current, root_page) {
            set_class(&link, ACTIVE_CLASS, true);
        }
    }
}

/// Same-page anchors scroll smoothly to their target instead of jumping.
pub(super) fn install_smooth_scroll(document: &Document) {
    let anchors = match query_all(document, ANCHOR_SELECTOR) {
        Ok(anchors) => anchors,
        Err(e) => {
            tracing::debug!("smooth scroll disabled: {e}");
            return;
        }
    };

    for anchor in anchors {
        let doc = document.clone();
        let link = anchor.clone();
        let on_click = move |ev: web_sys::Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = doc.get_element_by_id(id) else {
                return;
            };

            ev.prevent_default();
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        };
        if let Err(e) = listen(&anchor, "click", on_click) {
            tracing::warn!("smooth scroll: {e}");
        }
    }
}

pub(super) fn install_navbar_elevation(document: &Document, cfg: NavbarConfig) {
    let navbar = match query::<HtmlElement>(document, NAVBAR_SELECTOR) {
        Ok(navbar) => navbar,
        Err(e) => {
            tracing::debug!("navbar elevation disabled: {e}");
            return;
        }
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let w = window.clone();
    let on_scroll = move |_: web_sys::Event| {
        let y = w.scroll_y().unwrap_or(0.0);
        let _ = navbar
            .style()
            .set_property("box-shadow", navbar_shadow(y, &cfg));
    };
    if let Err(e) = listen(&window, "scroll", on_scroll) {
        tracing::warn!("navbar elevation: {e}");
    }
}
