use savings_site::SiteConfig;
use web_sys::Document;

mod calculator;
mod config;
mod contact;
mod dom;
mod logging;
mod navigation;
mod reveal;

/// Entry point called by the wasm start hook. Defers to `DOMContentLoaded`
/// when the document is still being parsed.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        initialize(&document);
        return;
    }

    // DOMContentLoaded fires once, so the leaked listener runs once.
    let doc = document.clone();
    if let Err(e) = dom::listen(&document, "DOMContentLoaded", move |_| initialize(&doc)) {
        web_sys::console::error_1(&e.into());
    }
}

/// Wires every page feature into `document`. Call once per page.
///
/// Each feature checks for its own elements and quietly stays off when the
/// page does not have them.
pub fn initialize(document: &Document) {
    let loaded = config::load_site_config(document);
    let cfg = match &loaded {
        Ok(Some(cfg)) => cfg.clone(),
        _ => SiteConfig::default(),
    };

    logging::init(&cfg.log_level);
    if let Err(e) = &loaded {
        tracing::warn!("ignoring page config: {e}");
    }

    // Validated above for page configs; the default locale always resolves.
    let locale = cfg.number_locale().unwrap_or_default();

    calculator::install(document, locale, cfg.animation_ms);

    navigation::install_menu_toggle(document);
    navigation::mark_active_link(document, &cfg.root_page);
    navigation::install_smooth_scroll(document);
    navigation::install_navbar_elevation(document, cfg.navbar.clone());

    reveal::install(document, &cfg.reveal);
    contact::install(document);

    tracing::debug!(locale = %cfg.locale, "page initialized");
}
