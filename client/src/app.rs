use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};

use podium_shared::{Board, CategoryFilter, FootnoteEntry, Selection, parse_descriptors};

use crate::tables::{self, BoardDom};
use crate::{filters, footnotes, sidebar, tabs, theme};

thread_local! {
    // Listener closures and Leptos mount handles live for the whole page
    // session; dropping one would detach its listener or unmount its view.
    static WIRING: RefCell<Vec<Box<dyn Any>>> = RefCell::new(Vec::new());
}

/// Keep a closure or mount handle alive for the page session.
pub(crate) fn retain<T: 'static>(binding: T) {
    WIRING.with(|slot| slot.borrow_mut().push(Box::new(binding)));
}

/// Attach a click handler to `target` and retain the closure.
pub(crate) fn on_click(
    target: &web_sys::EventTarget,
    handler: impl Fn(web_sys::Event) + 'static,
) {
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(handler);
    if target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        retain(closure);
    }
}

/// All elements matching `selector` that are HTML elements.
pub(crate) fn collect_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    let Ok(nodes) = document.query_selector_all(selector) else {
        return out;
    };
    for index in 0..nodes.length() {
        if let Some(el) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            out.push(el);
        }
    }
    out
}

/// One wired leaderboard: core state plus its DOM handles and the signal
/// feeding the mounted footnote block.
pub(crate) struct BoardState {
    pub board: Board,
    pub dom: BoardDom,
    pub footnotes: RwSignal<Vec<FootnoteEntry>>,
}

/// Session-scoped context: every per-board state object, keyed by board name,
/// owned here and mutated only from inside event handlers. Handlers run
/// synchronously and never interleave, so a plain `RefCell` suffices.
pub(crate) struct Session {
    pub boards: HashMap<String, BoardState>,
    pub tab_order: Vec<String>,
    pub tab_buttons: Vec<(String, HtmlElement)>,
    pub current_tab: Option<String>,
}

impl Session {
    fn new() -> Self {
        Self {
            boards: HashMap::new(),
            tab_order: Vec::new(),
            tab_buttons: Vec::new(),
            current_tab: None,
        }
    }

    fn render(state: &mut BoardState, outcome: podium_shared::RefreshOutcome) {
        tables::apply(&state.dom, &outcome);
        state.footnotes.set(outcome.footnotes);
    }

    pub fn set_category(&mut self, name: &str, category: CategoryFilter) {
        let Some(state) = self.boards.get_mut(name) else {
            return;
        };
        let outcome = state.board.set_category_filter(category);
        Self::render(state, outcome);
    }

    pub fn set_tags(&mut self, name: &str, selection: Selection) {
        let Some(state) = self.boards.get_mut(name) else {
            return;
        };
        let outcome = state.board.set_tag_selection(selection);
        Self::render(state, outcome);
    }

    pub fn sort(&mut self, name: &str, column: &str) {
        let Some(state) = self.boards.get_mut(name) else {
            return;
        };
        let outcome = state.board.sort_by(column);
        tables::apply_sort_classes(&state.dom, &state.board.sort);
        Self::render(state, outcome);
    }

    /// Activate a tab: swap button/panel active state, reset the incoming
    /// board's sort to its default, keep its filters as they were.
    pub fn switch_tab(&mut self, name: &str) {
        if self.current_tab.as_deref() == Some(name) {
            return;
        }
        if !self.boards.contains_key(name) {
            return;
        }
        for (tab, button) in &self.tab_buttons {
            let list = button.class_list();
            let _ = if tab == name {
                list.add_1("active")
            } else {
                list.remove_1("active")
            };
        }
        for (board_name, state) in &self.boards {
            if let Some(panel) = &state.dom.panel {
                let display = if board_name == name { "block" } else { "none" };
                let _ = panel.style().set_property("display", display);
            }
        }
        self.current_tab = Some(name.to_string());
        self.activate(name);
    }

    /// Default-sort and render a board; used on boot and on tab entry.
    pub fn activate(&mut self, name: &str) {
        let Some(state) = self.boards.get_mut(name) else {
            return;
        };
        let outcome = state.board.reset_sort();
        tables::apply_sort_classes(&state.dom, &state.board.sort);
        Self::render(state, outcome);
    }
}

/// Wire the whole page. Each step is independent: a board that fails to scan
/// is skipped with a diagnostic and the rest keep working.
pub fn boot(document: &Document) {
    theme::boot(document);
    sidebar::boot(document);

    let Some(data_el) = document.get_element_by_id("leaderboard-data") else {
        web_sys::console::warn_1(&"#leaderboard-data payload missing; leaderboards stay static".into());
        return;
    };
    let raw = data_el.text_content().unwrap_or_default();
    let descriptors = match parse_descriptors(&raw) {
        Ok(descriptors) => descriptors,
        Err(err) => {
            web_sys::console::warn_1(&format!("leaderboard payload unreadable: {err}").into());
            return;
        }
    };

    let session = Rc::new(RefCell::new(Session::new()));

    for descriptor in &descriptors {
        let Some((rows, dom)) = tables::scan(document, &descriptor.name) else {
            continue;
        };
        let footnotes = footnotes::mount(document, &descriptor.name);
        {
            let mut session = session.borrow_mut();
            session.tab_order.push(descriptor.name.clone());
            session.boards.insert(
                descriptor.name.clone(),
                BoardState {
                    board: Board::new(descriptor, rows),
                    dom,
                    footnotes,
                },
            );
        }
        tables::wire_sort_headers(&descriptor.name, &session);
        filters::wire(document, descriptor, &session);
    }

    if session.borrow().boards.is_empty() {
        return;
    }

    tabs::wire(document, &session);

    // Initial pass: rank and footnote every board over its pristine markup,
    // then bring up the first tab with its default sort applied.
    {
        let mut session = session.borrow_mut();
        let names = session.tab_order.clone();
        for name in &names {
            if let Some(state) = session.boards.get_mut(name) {
                let outcome = state.board.refresh();
                Session::render(state, outcome);
            }
        }
        if let Some(first) = names.first().cloned() {
            session.current_tab = Some(first.clone());
            session.activate(&first);
        }
    }
}
