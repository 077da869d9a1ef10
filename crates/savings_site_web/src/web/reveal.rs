use savings_site::config::RevealConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::{query_all, set_class};

pub(super) const REVEAL_CLASS: &str = "fade-in";

/// Fades content in the first time it scrolls into view. Revealed elements
/// are unobserved, so scrolling away never hides them again.
pub(super) fn install(document: &Document, cfg: &RevealConfig) {
    let elements = match query_all(document, &cfg.selector_list()) {
        Ok(elements) if !elements.is_empty() => elements,
        Ok(_) => {
            tracing::debug!("scroll reveal disabled: nothing to observe");
            return;
        }
        Err(e) => {
            tracing::debug!("scroll reveal disabled: {e}");
            return;
        }
    };

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    set_class(&target, REVEAL_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.threshold));
    init.set_root_margin(&cfg.root_margin());

    let observer =
        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(_) => {
                tracing::warn!("scroll reveal disabled: IntersectionObserver unavailable");
                return;
            }
        };
    on_intersect.forget();

    for el in &elements {
        observer.observe(el);
    }
    tracing::debug!(count = elements.len(), "scroll reveal observing");
}
