use savings_site::contact::{ContactField, ContactSubmission, SUCCESS_MESSAGE};
use web_sys::{Document, HtmlFormElement};

use super::dom::{element_by_id, field_value, listen};

pub(super) const FORM_ID: &str = "contact-form";

pub(super) fn install(document: &Document) {
    let form = match element_by_id::<HtmlFormElement>(document, FORM_ID) {
        Ok(form) => form,
        Err(e) => {
            tracing::debug!("contact form disabled: {e}");
            return;
        }
    };

    let doc = document.clone();
    let f = form.clone();
    let on_submit = move |ev: web_sys::Event| {
        // No endpoint yet: the form never navigates.
        ev.prevent_default();

        let read = |field: ContactField| {
            doc.get_element_by_id(field.id())
                .map(|el| field_value(&el))
                .unwrap_or_default()
        };
        let submission = ContactSubmission::from_raw(
            &read(ContactField::Name),
            &read(ContactField::Email),
            &read(ContactField::Message),
        );

        match submission.validate() {
            Ok(()) => {
                tracing::info!("contact form accepted");
                alert(SUCCESS_MESSAGE);
                f.reset();
            }
            Err(e) => alert(&e.to_string()),
        }
    };
    if let Err(e) = listen(&form, "submit", on_submit) {
        tracing::warn!("contact form: {e}");
    }
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}
