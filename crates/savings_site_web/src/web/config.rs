use savings_site::{SiteConfig, SiteError};
use web_sys::Document;

/// `<script type="application/json" id="site-config">{ ... }</script>`
pub(super) const CONFIG_ELEMENT_ID: &str = "site-config";

/// Page-supplied config, if the page carries a non-empty config block.
pub(super) fn load_site_config(document: &Document) -> Result<Option<SiteConfig>, SiteError> {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let raw = el.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }
    SiteConfig::from_json(&raw).map(Some)
}
