use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::app::{Session, collect_html, on_click};

/// Wire the leaderboard tab strip. Buttons carry their target board in
/// `data-tab`; activation itself lives on the session.
pub(crate) fn wire(document: &Document, session: &Rc<RefCell<Session>>) {
    let buttons: Vec<_> = collect_html(document, ".tab-button")
        .into_iter()
        .filter_map(|el| el.get_attribute("data-tab").map(|tab| (tab, el)))
        .collect();

    session.borrow_mut().tab_buttons = buttons.clone();

    for (tab, button) in buttons {
        let session = Rc::clone(session);
        on_click(&button, move |_| {
            session.borrow_mut().switch_tab(&tab);
        });
    }
}
