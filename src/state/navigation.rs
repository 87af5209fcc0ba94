//! Page switching

/// Pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Landing page: pick encode or decode, read about the methods
    #[default]
    Home,
    /// Hide a message inside an image
    Encode,
    /// Extract a message from an image
    Decode,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Encode => "Encode Message",
            Page::Decode => "Decode Message",
        }
    }

    /// Whether a direct transition from `self` to `to` exists.
    ///
    /// Home leads to either view; every view leads back to Home.
    pub fn can_navigate_to(&self, to: Page) -> bool {
        matches!(
            (self, to),
            (Page::Home, Page::Encode | Page::Decode) | (Page::Encode | Page::Decode, Page::Home)
        )
    }
}

/// Current page, with no history: back always means Home
#[derive(Debug, Default)]
pub struct Navigation {
    current: Page,
}

impl Navigation {
    pub fn current(&self) -> Page {
        self.current
    }

    /// Move to `to`, returning the page that was left.
    ///
    /// Returns `None` and stays put when the transition is not allowed.
    pub fn navigate(&mut self, to: Page) -> Option<Page> {
        if !self.current.can_navigate_to(to) {
            tracing::warn!("Ignoring navigation from {:?} to {:?}", self.current, to);
            return None;
        }

        let left = self.current;
        self.current = to;
        tracing::debug!("Navigated from {:?} to {:?}", left, to);
        Some(left)
    }
}
