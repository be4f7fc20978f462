use web_sys::{Document, HtmlElement};

use crate::app::{collect_html, on_click};

/// Whether a panel with `panel_id` is the one a section link targets.
fn section_matches(panel_id: &str, section: &str) -> bool {
    panel_id == format!("{section}-section")
}

fn subsection_matches(panel_id: &str, subsection: &str) -> bool {
    panel_id == format!("about-{subsection}")
}

fn show_section(sections: &[HtmlElement], section: &str) {
    for panel in sections {
        let display = if section_matches(&panel.id(), section) {
            "block"
        } else {
            "none"
        };
        let _ = panel.style().set_property("display", display);
    }
}

fn show_subsection(subsections: &[HtmlElement], subsection: &str) {
    for panel in subsections {
        let display = if subsection_matches(&panel.id(), subsection) {
            "block"
        } else {
            "none"
        };
        let _ = panel.style().set_property("display", display);
    }
}

fn clear_active(links: &[HtmlElement]) {
    for link in links {
        let _ = link.class_list().remove_1("active");
    }
}

/// Wire the sidebar: main section links, about sublinks, and the collapsible
/// about category. External sublinks are left to the browser.
pub(crate) fn boot(document: &Document) {
    let links = collect_html(document, ".sidebar-link");
    let sublinks = collect_html(document, ".sidebar-sublink");
    let sections = collect_html(document, ".content-section");
    let subsections = collect_html(document, ".about-subsection");

    if let (Some(category), Some(submenu)) = (
        document.get_element_by_id("about-category"),
        document.get_element_by_id("about-submenu"),
    ) {
        let category_el = category.clone();
        on_click(&category, move |event| {
            event.prevent_default();
            let _ = category_el.class_list().toggle("collapsed");
            let _ = submenu.class_list().toggle("collapsed");
        });
    }

    for link in &links {
        let link_el = link.clone();
        let links = links.clone();
        let sublinks = sublinks.clone();
        let sections = sections.clone();
        on_click(link, move |event| {
            event.prevent_default();
            let Some(section) = link_el.get_attribute("data-section") else {
                return;
            };
            clear_active(&links);
            clear_active(&sublinks);
            let _ = link_el.class_list().add_1("active");
            show_section(&sections, &section);
        });
    }

    for sublink in &sublinks {
        if sublink.class_list().contains("sidebar-external-link") {
            continue;
        }
        let sublink_el = sublink.clone();
        let links = links.clone();
        let sublinks = sublinks.clone();
        let sections = sections.clone();
        let subsections = subsections.clone();
        on_click(sublink, move |event| {
            event.prevent_default();
            let Some(section) = sublink_el.get_attribute("data-section") else {
                return;
            };
            let Some(subsection) = sublink_el.get_attribute("data-subsection") else {
                return;
            };
            clear_active(&links);
            clear_active(&sublinks);
            let _ = sublink_el.class_list().add_1("active");
            show_section(&sections, &section);
            show_subsection(&subsections, &subsection);
        });
    }

    show_section(&sections, "leaderboard");
}

#[cfg(test)]
mod tests {
    use super::{section_matches, subsection_matches};

    #[test]
    fn section_links_target_suffixed_panels() {
        assert!(section_matches("leaderboard-section", "leaderboard"));
        assert!(!section_matches("about-section", "leaderboard"));
    }

    #[test]
    fn subsection_links_target_about_prefixed_panels() {
        assert!(subsection_matches("about-citation", "citation"));
        assert!(!subsection_matches("about-code", "citation"));
    }
}
