use std::sync::Arc;

use tokio::sync::watch;

use eightspace_types::artist::Artist;
use eightspace_types::catalog::{ArtworkContext, LightboxContent};
use eightspace_types::error::NavigationError;
use eightspace_types::navigation::{DeepLinkContext, Page};

use crate::catalog::Catalog;
use crate::exhibition::ExhibitionView;

use super::state::NavigatorState;

/// Owns the navigator state and publishes every change to subscribers.
///
/// Invalid requests return an error and leave the published state untouched.
pub struct Navigator {
    catalog: Arc<Catalog>,
    state: watch::Sender<NavigatorState>,
}

impl Navigator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let (state, _) = watch::channel(NavigatorState::default());
        Self { catalog, state }
    }

    /// Receive every state the navigator publishes from now on.
    pub fn subscribe(&self) -> watch::Receiver<NavigatorState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> NavigatorState {
        self.state.borrow().clone()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn navigate(&self, page: Page) {
        tracing::debug!(%page, "navigate");
        self.apply(|state| state.navigate(page));
    }

    /// Navigate by page name, e.g. from a command line or URL fragment.
    pub fn navigate_named(&self, name: &str) -> Result<Page, NavigationError> {
        let page: Page = name.parse()?;
        self.navigate(page);
        Ok(page)
    }

    /// Open the exhibition an artist shows in, filtered to that artist.
    pub fn view_artist_works(&self, artist: Artist) -> Result<DeepLinkContext, NavigationError> {
        let exhibition = self
            .catalog
            .exhibition_for_artist(artist)
            .ok_or(NavigationError::NoExhibitionForArtist(artist))?;
        let title = exhibition.title.clone();
        self.open_deep_link(&title, artist)
    }

    /// Open `exhibition` pre-filtered to `artist`.
    pub fn open_deep_link(
        &self,
        exhibition: &str,
        artist: Artist,
    ) -> Result<DeepLinkContext, NavigationError> {
        let exhibition = self
            .catalog
            .exhibition(exhibition)
            .map_err(|_| NavigationError::UnknownExhibition(exhibition.to_string()))?;

        let link = DeepLinkContext {
            exhibition: exhibition.title.clone(),
            artist,
        };
        tracing::debug!(exhibition = %link.exhibition, %artist, "follow deep link");
        let next = link.clone();
        self.apply(move |state| state.follow_deep_link(next));
        Ok(link)
    }

    pub fn open_lightbox(&self, content: LightboxContent) {
        self.apply(|state| state.open_lightbox(content));
    }

    pub fn close_lightbox(&self) {
        self.apply(NavigatorState::close_lightbox);
    }

    pub fn toggle_menu(&self) {
        self.apply(NavigatorState::toggle_menu);
    }

    pub fn observe_scroll(&self, offset: f64) {
        self.apply(|state| state.observe_scroll(offset));
    }

    pub fn viewed_artwork(&self) -> Option<ArtworkContext> {
        self.state.borrow().viewed_artwork().cloned()
    }

    /// A fresh exhibition sub-view for the current deep link.
    pub fn exhibition_view(&self) -> ExhibitionView {
        let state = self.state.borrow();
        ExhibitionView::new(Arc::clone(&self.catalog), state.deep_link.as_ref())
    }

    fn apply(&self, transition: impl FnOnce(NavigatorState) -> NavigatorState) {
        self.state.send_if_modified(|state| {
            let next = transition(state.clone());
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
    }
}
