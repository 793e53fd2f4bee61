use tracing::{debug, trace};

/// Page sections of the single-page client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Upload,
    Dashboard,
    Records,
    About,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Upload,
        Page::Dashboard,
        Page::Records,
        Page::About,
    ];

    /// DOM id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "page-home",
            Page::Upload => "page-upload",
            Page::Dashboard => "page-dashboard",
            Page::Records => "page-records",
            Page::About => "page-about",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Upload => "Upload",
            Page::Dashboard => "Dashboard",
            Page::Records => "Records",
            Page::About => "About",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }
}

/// Keeps exactly one page section visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    visible: Page,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            visible: Page::Home,
        }
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveals the section with the given id and hides the rest.
    ///
    /// An unknown id leaves the current section visible and returns `None`.
    pub fn show_page(&mut self, id: &str) -> Option<Page> {
        match Page::from_id(id) {
            Some(page) => {
                trace!(from = ?self.visible, to = ?page, "Switching page");
                self.visible = page;
                Some(page)
            }
            None => {
                debug!(id, "Ignoring unknown page id");
                None
            }
        }
    }

    pub fn visible(&self) -> Page {
        self.visible
    }

    pub fn is_visible(&self, page: Page) -> bool {
        self.visible == page
    }
}
