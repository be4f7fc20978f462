use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use podium_shared::{BoardDescriptor, CategoryFilter, Selection};

use crate::app::{Session, collect_html, on_click, retain};
use crate::multiselect::MultiSelect;

/// Wire one board's filter chrome: the pre-rendered type filter buttons and
/// the tag dropdown mounted into its placeholder container.
pub(crate) fn wire(
    document: &Document,
    descriptor: &BoardDescriptor,
    session: &Rc<RefCell<Session>>,
) {
    wire_type_buttons(document, &descriptor.name, session);
    mount_tag_dropdown(document, descriptor, session);
}

fn wire_type_buttons(document: &Document, name: &str, session: &Rc<RefCell<Session>>) {
    let buttons = collect_html(document, &format!("#{name}-type-filter .filter-btn"));
    for button in &buttons {
        let Some(value) = button.get_attribute("data-filter") else {
            continue;
        };
        let session = Rc::clone(session);
        let name = name.to_string();
        let clicked = button.clone();
        let siblings = buttons.clone();
        on_click(button, move |_| {
            for sibling in &siblings {
                let _ = sibling.class_list().remove_1("active");
            }
            let _ = clicked.class_list().add_1("active");
            session
                .borrow_mut()
                .set_category(&name, CategoryFilter::from_value(&value));
        });
    }
}

fn mount_tag_dropdown(
    document: &Document,
    descriptor: &BoardDescriptor,
    session: &Rc<RefCell<Session>>,
) {
    let container = document
        .get_element_by_id(&format!("{}-tag-filter", descriptor.name))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(container) = container else {
        web_sys::console::warn_1(
            &format!("tag filter container #{}-tag-filter not found", descriptor.name).into(),
        );
        return;
    };

    let items = descriptor.tags.clone();
    let name = descriptor.name.clone();
    let session = Rc::clone(session);
    let on_change = UnsyncCallback::new(move |selection: Selection| {
        session.borrow_mut().set_tags(&name, selection);
    });

    let handle = leptos::mount::mount_to(container, move || {
        view! {
            <MultiSelect
                items=items
                label="Tags".to_string()
                initial=Selection::All
                on_change=on_change
            />
        }
    });
    retain(handle);
}
