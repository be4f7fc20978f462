mod app;
mod filters;
mod footnotes;
mod multiselect;
mod sidebar;
mod tables;
mod tabs;
mod theme;

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    app::boot(&document);
}
