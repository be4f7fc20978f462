use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use podium_shared::select::{self, Selection};

/// Reusable multi-select dropdown with search and an "All" sentinel option.
///
/// Owns only its open/closed state, search string, and selection set; row data
/// never flows through it. Selection changes surface via `on_change`, which
/// always receives either `All` or the exact concrete-item set.
#[component]
pub fn MultiSelect(
    items: Vec<String>,
    label: String,
    initial: Selection,
    #[prop(into)] on_change: UnsyncCallback<Selection>,
) -> impl IntoView {
    let selection = RwSignal::new(initial);
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let wrapper: NodeRef<html::Div> = NodeRef::new();
    let search_input: NodeRef<html::Input> = NodeRef::new();

    // Focus the search box shortly after the dropdown opens, once the input
    // is actually displayed.
    Effect::new(move || {
        if !open.get() {
            return;
        }
        Timeout::new(100, move || {
            if let Some(input) = search_input.get_untracked() {
                let _ = input.focus();
            }
        })
        .forget();
    });

    // A click anywhere outside the wrapper closes the dropdown. Clicks inside
    // (toggle, search, options) keep the current open state.
    Effect::new(move || {
        let Some(wrapper_el) = wrapper.get() else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let handler = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            if !open.get_untracked() {
                return;
            }
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| wrapper_el.contains(Some(&node)));
            if !inside {
                open.set(false);
            }
        });
        if document
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            // `document` and `handler` are both `!Send`, but `on_cleanup`
            // requires a `Send + Sync` closure. Park them in a thread-local
            // arena handle (itself `Copy + Send + Sync`) and reach back through
            // it at cleanup time.
            let stored = StoredValue::new_local((document, handler));
            on_cleanup(move || {
                stored.with_value(|(document, handler)| {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        handler.as_ref().unchecked_ref(),
                    );
                });
            });
        }
    });

    let all_label = format!("All {label}");
    let toggle_label = move || format!("{}: {}", label, selection.get().summary());

    view! {
        <div class="multiselect-wrapper" node_ref=wrapper>
            <button
                class="multiselect-toggle"
                type="button"
                on:click=move |_| open.update(|v| *v = !*v)
            >
                <span class="multiselect-label">{toggle_label}</span>
                <svg
                    class="multiselect-arrow"
                    width="12"
                    height="12"
                    viewBox="0 0 12 12"
                    fill="currentColor"
                    style:transform=move || {
                        if open.get() { "rotate(180deg)" } else { "rotate(0deg)" }
                    }
                >
                    <path d="M6 8L2 4h8L6 8z" />
                </svg>
            </button>
            <div
                class="multiselect-dropdown"
                style:display=move || if open.get() { "block" } else { "none" }
            >
                <div class="multiselect-search-container">
                    <input
                        type="text"
                        class="multiselect-search"
                        placeholder="Search..."
                        autocomplete="off"
                        node_ref=search_input
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <div class="multiselect-options">
                    <label class="multiselect-option">
                        <input
                            type="checkbox"
                            prop:checked=move || selection.get().is_all()
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                selection.update(|s| s.toggle_all(checked));
                                on_change.run(selection.get_untracked());
                            }
                        />
                        <span class="multiselect-option-text">{all_label}</span>
                    </label>
                    {items
                        .into_iter()
                        .map(|item| {
                            let shown = item.clone();
                            let toggled = item.clone();
                            let display_text = item.clone();
                            view! {
                                <label
                                    class="multiselect-option"
                                    style:display=move || {
                                        if select::search_matches(&item, &query.get()) {
                                            "flex"
                                        } else {
                                            "none"
                                        }
                                    }
                                >
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selection.get().shows_checked(&shown)
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            selection.update(|s| s.toggle_item(&toggled, checked));
                                            on_change.run(selection.get_untracked());
                                        }
                                    />
                                    <span class="multiselect-option-text">{display_text}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
