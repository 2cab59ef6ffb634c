//! CSS for the overlay windows. Both windows draw everything themselves,
//! so the only job here is to strip GTK's default window background.

use gtk4::gdk;

const CSS: &str = r"
    window.edge-strip,
    window.launcher-surface {
        background: transparent;
        background-color: transparent;
        box-shadow: none;
    }
";

pub fn load() {
    let provider = gtk4::CssProvider::new();
    provider.load_from_string(CSS);

    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
