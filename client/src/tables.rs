use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use podium_shared::{RefreshOutcome, Row, SortState};

use crate::app::{Session, collect_html, on_click};

/// DOM handles for one board's table, captured once at boot. Row handles are
/// indexed by row id (document order at load), matching the core's indexing.
pub(crate) struct BoardDom {
    pub tbody: Element,
    /// Element hidden around the table when a filter empties the board.
    pub wrapper: Option<HtmlElement>,
    pub rows: Vec<RowDom>,
    /// Sortable header cells with their `data-sort` column keys.
    pub headers: Vec<(String, HtmlElement)>,
    pub no_results: Option<HtmlElement>,
    /// The board's content panel, toggled by the tab controller.
    pub panel: Option<HtmlElement>,
}

pub(crate) struct RowDom {
    pub el: HtmlElement,
    pub rank_cell: Option<HtmlElement>,
    pub marker: Option<HtmlElement>,
}

/// Rank cell text: the number, or blank for hidden rows.
fn rank_text(rank: Option<usize>) -> String {
    rank.map(|r| r.to_string()).unwrap_or_default()
}

fn html_child(el: &Element, selector: &str) -> Option<HtmlElement> {
    el.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|found| found.dyn_into::<HtmlElement>().ok())
}

/// Read a board's pre-rendered table into typed rows plus element handles.
/// Missing attributes fall back to neutral defaults; a missing table or body
/// skips the board with a diagnostic.
pub(crate) fn scan(document: &Document, name: &str) -> Option<(Vec<Row>, BoardDom)> {
    let Some(table) = document.get_element_by_id(&format!("{name}-table")) else {
        web_sys::console::warn_1(&format!("leaderboard table #{name}-table not found").into());
        return None;
    };
    let Ok(Some(tbody)) = table.query_selector("tbody") else {
        web_sys::console::warn_1(&format!("leaderboard table #{name}-table has no body").into());
        return None;
    };

    let headers: Vec<(String, HtmlElement)> =
        collect_html(document, &format!("#{name}-table th.sortable"))
            .into_iter()
            .filter_map(|el| el.get_attribute("data-sort").map(|column| (column, el)))
            .collect();

    let mut rows = Vec::new();
    let mut row_doms = Vec::new();
    for el in collect_html(document, &format!("#{name}-table tbody tr.leaderboard-row")) {
        let category = el.get_attribute("data-type").unwrap_or_default();
        let tags = Row::parse_tags(&el.get_attribute("data-tags").unwrap_or_default());
        let footnote = el.get_attribute("data-footnote");
        let mut values = HashMap::new();
        for (column, _) in &headers {
            if let Some(value) = el.get_attribute(&format!("data-{column}")) {
                values.insert(column.clone(), value);
            }
        }
        let rank_cell = html_child(&el, ".rank-col");
        let marker = html_child(&el, ".footnote-ref");
        rows.push(Row::new(category, tags, values, footnote));
        row_doms.push(RowDom {
            el,
            rank_cell,
            marker,
        });
    }

    let wrapper = table
        .parent_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let panel = document
        .get_element_by_id(&format!("{name}-content"))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let no_results = panel
        .as_ref()
        .and_then(|panel| html_child(panel, ".no-results"));

    Some((
        rows,
        BoardDom {
            tbody,
            wrapper,
            rows: row_doms,
            headers,
            no_results,
            panel,
        },
    ))
}

/// Push one pipeline outcome into the DOM: visibility classes, rank text,
/// footnote markers, display order, and the no-results state.
pub(crate) fn apply(dom: &BoardDom, outcome: &RefreshOutcome) {
    for (id, row) in dom.rows.iter().enumerate() {
        let visible = outcome.visible.get(id).copied().unwrap_or(false);
        let _ = if visible {
            row.el.class_list().remove_1("hidden")
        } else {
            row.el.class_list().add_1("hidden")
        };
        if let Some(cell) = &row.rank_cell {
            cell.set_text_content(Some(&rank_text(
                outcome.ranks.get(id).copied().flatten(),
            )));
        }
        if let Some(marker) = &row.marker {
            match outcome.markers.get(id).and_then(|glyph| glyph.as_deref()) {
                Some(glyph) => {
                    marker.set_text_content(Some(glyph));
                    let _ = marker.style().set_property("display", "inline");
                }
                None => {
                    marker.set_text_content(Some(""));
                    let _ = marker.style().set_property("display", "none");
                }
            }
        }
    }

    // append_child moves an already-attached node, so one walk in display
    // order leaves the body sorted.
    for &id in &outcome.order {
        if let Some(row) = dom.rows.get(id) {
            let _ = dom.tbody.append_child(&row.el);
        }
    }

    if let Some(no_results) = &dom.no_results {
        let display = if outcome.no_results { "block" } else { "none" };
        let _ = no_results.style().set_property("display", display);
    }
    if let Some(wrapper) = &dom.wrapper {
        let display = if outcome.no_results { "none" } else { "block" };
        let _ = wrapper.style().set_property("display", display);
    }
}

/// Mirror the sort state onto the header cells.
pub(crate) fn apply_sort_classes(dom: &BoardDom, sort: &SortState) {
    for (column, el) in &dom.headers {
        let list = el.class_list();
        let _ = list.remove_3("active", "asc", "desc");
        if sort.column.as_deref() == Some(column.as_str()) {
            let _ = list.add_2("active", sort.direction.css_class());
        }
    }
}

/// Attach click handlers to a board's sortable headers.
pub(crate) fn wire_sort_headers(name: &str, session: &Rc<RefCell<Session>>) {
    let headers: Vec<(String, HtmlElement)> = {
        let session = session.borrow();
        let Some(state) = session.boards.get(name) else {
            return;
        };
        state.dom.headers.clone()
    };
    for (column, el) in headers {
        let session = Rc::clone(session);
        let name = name.to_string();
        on_click(&el, move |_| {
            session.borrow_mut().sort(&name, &column);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::rank_text;

    #[test]
    fn ranked_rows_render_their_number() {
        assert_eq!(rank_text(Some(7)), "7");
    }

    #[test]
    fn hidden_rows_render_blank() {
        assert_eq!(rank_text(None), "");
    }
}
