use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// In-page anchor targets, in navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Solutions,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Solutions,
        Section::About,
        Section::Contact,
    ];

    /// Element id the section is rendered with.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Solutions => "solutions",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Solutions => "Solutions",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

/// Smoothly scrolls the element with `id` into view. Does nothing if there is
/// no such element.
pub fn smooth_scroll(id: &str) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id));

    if let Some(element) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        debug!("no scroll target #{}", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_lowercased_labels() {
        for section in Section::ALL {
            assert_eq!(section.id(), section.label().to_lowercase());
        }
    }

    #[test]
    fn navigation_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "solutions", "about", "contact"]);
    }
}
