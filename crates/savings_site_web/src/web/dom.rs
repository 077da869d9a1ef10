use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList,
};

pub(super) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, String> {
    document
        .get_element_by_id(id)
        .ok_or(format!("#{id}: missing"))?
        .dyn_into::<T>()
        .map_err(|_| format!("#{id}: unexpected element type"))
}

pub(super) fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T, String> {
    document
        .query_selector(selector)
        .map_err(|_| format!("{selector}: invalid selector"))?
        .ok_or(format!("{selector}: missing"))?
        .dyn_into::<T>()
        .map_err(|_| format!("{selector}: unexpected element type"))
}

pub(super) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, String> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .map_err(|_| format!("{selector}: invalid selector"))
}

pub(super) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, String> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .map_err(|_| format!("{selector}: invalid selector"))
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i).and_then(|n| n.dyn_into::<Element>().ok()))
        .collect()
}

/// Registers `handler` for the lifetime of the page.
pub(super) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| format!("{event}: add_event_listener failed"))?;
    cb.forget();
    Ok(())
}

/// Current value of an input or textarea; text content for anything else.
pub(super) fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        el.text_content().unwrap_or_default()
    }
}

pub(super) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

pub(super) fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Re-triggers a CSS animation bound to `class`: remove, force layout, add.
pub(super) fn restart_class(el: &HtmlElement, class: &str) {
    let list = el.class_list();
    let _ = list.remove_1(class);
    let _ = el.offset_width();
    let _ = list.add_1(class);
}
