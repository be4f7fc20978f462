use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use podium_shared::FootnoteEntry;

use crate::app::retain;

/// Mount a board's footnote block into its `#<name>-footnotes` container and
/// hand back the signal the refresh pipeline writes. A missing container
/// still yields a signal so the rest of the board stays wired.
pub(crate) fn mount(document: &Document, name: &str) -> RwSignal<Vec<FootnoteEntry>> {
    let entries: RwSignal<Vec<FootnoteEntry>> = RwSignal::new(Vec::new());
    let container = document
        .get_element_by_id(&format!("{name}-footnotes"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(container) = container else {
        web_sys::console::warn_1(&format!("footnote container #{name}-footnotes not found").into());
        return entries;
    };

    let handle = leptos::mount::mount_to(container, move || {
        view! { <FootnoteBlock entries=entries /> }
    });
    retain(handle);
    entries
}

/// The rendered footnote list: one "glyph text" line per entry, suppressed
/// entirely while the entry list is empty.
#[component]
fn FootnoteBlock(entries: RwSignal<Vec<FootnoteEntry>>) -> impl IntoView {
    view! {
        <div
            class="footnote-list"
            style:display=move || if entries.get().is_empty() { "none" } else { "block" }
        >
            <For
                each=move || entries.get()
                key=|entry| (entry.number, entry.text.clone())
                children=|entry| {
                    view! {
                        <p class="footnote-text">{format!("{} {}", entry.symbol(), entry.text)}</p>
                    }
                }
            />
        </div>
    }
}
