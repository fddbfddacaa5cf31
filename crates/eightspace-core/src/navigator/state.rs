//! Immutable navigator state and its transitions.
//!
//! Every transition consumes the old value and returns the next one; the
//! [`Navigator`](super::Navigator) controller is the only writer.

use serde::{Deserialize, Serialize};

use eightspace_types::catalog::{ArtworkContext, LightboxContent};
use eightspace_types::navigation::{DeepLinkContext, Page};

/// Scroll offset (in pixels) past which the header is considered scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigatorState {
    pub page: Page,
    pub menu_open: bool,
    pub scrolled: bool,
    pub lightbox: Option<LightboxContent>,
    pub deep_link: Option<DeepLinkContext>,
    /// Bumped whenever the exhibition view must drop its sub-state.
    pub exhibition_epoch: u64,
}

impl NavigatorState {
    /// Manual navigation: closes the menu and forgets any deep link.
    pub fn navigate(self, page: Page) -> Self {
        let exhibition_epoch = if page == Page::Exhibition {
            self.exhibition_epoch + 1
        } else {
            self.exhibition_epoch
        };

        Self {
            page,
            menu_open: false,
            deep_link: None,
            exhibition_epoch,
            ..self
        }
    }

    /// Jump to the exhibition page pre-filtered by `link`.
    pub fn follow_deep_link(self, link: DeepLinkContext) -> Self {
        Self {
            page: Page::Exhibition,
            menu_open: false,
            deep_link: Some(link),
            exhibition_epoch: self.exhibition_epoch + 1,
            ..self
        }
    }

    pub fn open_lightbox(self, content: LightboxContent) -> Self {
        Self {
            lightbox: Some(content),
            ..self
        }
    }

    pub fn close_lightbox(self) -> Self {
        Self {
            lightbox: None,
            ..self
        }
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    pub fn observe_scroll(self, offset: f64) -> Self {
        Self {
            scrolled: offset > SCROLL_THRESHOLD,
            ..self
        }
    }

    /// The artwork currently enlarged, if the lightbox shows an art piece.
    pub fn viewed_artwork(&self) -> Option<&ArtworkContext> {
        self.lightbox.as_ref().and_then(|content| content.artwork.as_ref())
    }
}
