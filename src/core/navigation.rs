//! In-page navigation between the site's sections.
//!
//! Components never touch the DOM to move around the page. They go through a
//! [`SectionNavigator`], which reports whether the target existed instead of
//! failing. A missing target is a silent no-op.

use derive_more::Display;

use crate::core::scroll::ScrollState;

/// Identifiers of the page sections that navigation can target.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[display("work")]
    Work,
    #[display("services")]
    Services,
    #[display("approach")]
    Approach,
    #[display("about")]
    About,
    #[display("contact")]
    Contact,
}

impl SectionId {
    /// DOM id of the section element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Work => "work",
            SectionId::Services => "services",
            SectionId::Approach => "approach",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }
}

/// A navigation entry shown in the header and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

impl NavItem {
    pub const fn new(label: &'static str, target: SectionId) -> Self {
        Self { label, target }
    }

    pub fn target_id(&self) -> &'static str {
        self.target.as_str()
    }
}

/// Result of a scroll request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The element was found and a smooth scroll was requested.
    Scrolled,
    /// No element with that id exists; nothing happened.
    Missing,
}

/// Smooth-scroll service the view components depend on.
pub trait SectionNavigator {
    /// Smoothly scroll the element with the given id into view.
    fn scroll_to_section(&self, id: &str) -> ScrollOutcome;

    /// Smoothly scroll back to the top of the page.
    fn scroll_to_top(&self);
}

/// Local state owned by the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub menu_open: bool,
    pub scroll: ScrollState,
}

impl HeaderState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll = ScrollState::from_offset(offset);
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.scrolled_past_threshold
    }

    /// Handle a click on a navigation entry: close the overlay, then request
    /// a smooth scroll to the entry's section.
    pub fn on_nav_click<N: SectionNavigator + ?Sized>(
        &mut self,
        navigator: &N,
        item: &NavItem,
    ) -> ScrollOutcome {
        self.close_menu();
        navigator.scroll_to_section(item.target_id())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Navigator over a fixed set of known section ids that records requests.
    #[derive(Default)]
    pub struct RecordingNavigator {
        known: HashSet<String>,
        pub requests: RefCell<Vec<String>>,
        pub top_requests: RefCell<usize>,
    }

    impl RecordingNavigator {
        pub fn with_sections(ids: &[&str]) -> Self {
            Self {
                known: ids.iter().map(|id| id.to_string()).collect(),
                ..Default::default()
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl SectionNavigator for RecordingNavigator {
        fn scroll_to_section(&self, id: &str) -> ScrollOutcome {
            if self.known.contains(id) {
                self.requests.borrow_mut().push(id.to_string());
                ScrollOutcome::Scrolled
            } else {
                ScrollOutcome::Missing
            }
        }

        fn scroll_to_top(&self) {
            *self.top_requests.borrow_mut() += 1;
        }
    }
}
