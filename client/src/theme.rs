use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::app::on_click;

const THEME_KEY: &str = "theme";
const DARK: &str = "dark";
const LIGHT: &str = "light";

fn saved_theme() -> String {
    LocalStorage::get(THEME_KEY).unwrap_or_else(|_| LIGHT.to_string())
}

/// The root carries `data-theme="dark"` in dark mode and no attribute in
/// light mode, so stylesheets default to light.
fn apply_root_theme(document: &Document, theme: &str) {
    let Some(root) = document.document_element() else {
        return;
    };
    if theme == DARK {
        let _ = root.set_attribute("data-theme", DARK);
    } else {
        let _ = root.remove_attribute("data-theme");
    }
}

fn icon(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn update_toggle_state(document: &Document, switch: &Element, theme: &str) {
    let dark = theme == DARK;
    let _ = if dark {
        switch.class_list().add_1("active")
    } else {
        switch.class_list().remove_1("active")
    };
    if let Some(sun) = icon(document, "sun-icon") {
        let _ = sun
            .style()
            .set_property("display", if dark { "none" } else { "block" });
    }
    if let Some(moon) = icon(document, "moon-icon") {
        let _ = moon
            .style()
            .set_property("display", if dark { "block" } else { "none" });
    }
}

/// Re-apply the persisted theme and wire the header toggle. The preference is
/// the only value this page persists.
pub(crate) fn boot(document: &Document) {
    let theme = saved_theme();
    apply_root_theme(document, &theme);

    let Some(toggle) = document.get_element_by_id("dark-mode-toggle") else {
        web_sys::console::warn_1(&"dark mode toggle #dark-mode-toggle not found".into());
        return;
    };
    let Ok(Some(switch)) = document.query_selector(".toggle-switch") else {
        web_sys::console::warn_1(&"dark mode .toggle-switch not found".into());
        return;
    };
    update_toggle_state(document, &switch, &theme);

    let document = document.clone();
    on_click(&toggle, move |event| {
        event.prevent_default();
        let currently_dark = document
            .document_element()
            .is_some_and(|root| root.get_attribute("data-theme").as_deref() == Some(DARK));
        let next = if currently_dark { LIGHT } else { DARK };
        apply_root_theme(&document, next);
        if LocalStorage::set(THEME_KEY, &next).is_err() {
            web_sys::console::warn_1(&"theme preference could not be persisted".into());
        }
        update_toggle_state(&document, &switch, next);
    });
}
