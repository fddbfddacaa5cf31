//! Posters/gallery sub-view of the exhibition page.
//!
//! A fresh [`ExhibitionView`] is built whenever the navigator's exhibition
//! epoch moves, so it never has to reset itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use eightspace_types::artist::Artist;
use eightspace_types::catalog::{ArtPiece, Exhibition, LightboxContent};
use eightspace_types::error::CatalogError;
use eightspace_types::navigation::DeepLinkContext;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Posters,
    Gallery,
}

/// Narrows the gallery grid to one member artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtistFilter {
    #[default]
    All,
    Artist(Artist),
}

impl ArtistFilter {
    fn admits(&self, artist: Artist) -> bool {
        match self {
            ArtistFilter::All => true,
            ArtistFilter::Artist(wanted) => *wanted == artist,
        }
    }
}

/// What selecting a poster did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterSelection {
    /// The poster belongs to a known exhibition; the view switched to its gallery.
    Gallery,
    /// No exhibition data exists for the poster; show the poster enlarged instead.
    Enlarge(LightboxContent),
}

#[derive(Debug, Clone)]
pub struct ExhibitionView {
    catalog: Arc<Catalog>,
    mode: ViewMode,
    active: Option<String>,
    filter: ArtistFilter,
}

impl ExhibitionView {
    /// Build the view, opening straight into the gallery when a deep link
    /// names an exhibition.
    pub fn new(catalog: Arc<Catalog>, deep_link: Option<&DeepLinkContext>) -> Self {
        let mut view = Self {
            catalog,
            mode: ViewMode::Posters,
            active: None,
            filter: ArtistFilter::All,
        };

        if let Some(link) = deep_link {
            view.mode = ViewMode::Gallery;
            view.active = Some(link.exhibition.clone());
            view.filter = ArtistFilter::Artist(link.artist);
        }

        view
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn filter(&self) -> ArtistFilter {
        self.filter
    }

    /// The exhibition whose gallery is (or was last) open.
    pub fn active_exhibition(&self) -> Option<&Exhibition> {
        self.active
            .as_deref()
            .and_then(|title| self.catalog.exhibition(title).ok())
    }

    pub fn select_poster(&mut self, title: &str) -> Result<PosterSelection, CatalogError> {
        let poster = self
            .catalog
            .posters()
            .iter()
            .find(|poster| poster.title.eq_ignore_ascii_case(title.trim()))
            .ok_or_else(|| CatalogError::UnknownExhibition(title.to_string()))?;

        match self.catalog.exhibition(&poster.title) {
            Ok(exhibition) => {
                self.active = Some(exhibition.title.clone());
                self.mode = ViewMode::Gallery;
                self.filter = ArtistFilter::All;
                Ok(PosterSelection::Gallery)
            }
            Err(_) => {
                tracing::debug!(title = %poster.title, "poster has no exhibition data, enlarging");
                Ok(PosterSelection::Enlarge(LightboxContent {
                    url: poster.url.clone(),
                    title: Some(poster.title.clone()),
                    hide_info: true,
                    ..Default::default()
                }))
            }
        }
    }

    pub fn set_filter(&mut self, filter: ArtistFilter) {
        self.filter = filter;
    }

    pub fn back_to_posters(&mut self) {
        self.mode = ViewMode::Posters;
    }

    /// Pieces on show: the active exhibition's artists, narrowed by the filter.
    /// Empty while the posters are displayed.
    pub fn pieces(&self) -> Vec<&ArtPiece> {
        if self.mode == ViewMode::Posters {
            return Vec::new();
        }
        let Some(exhibition) = self.active_exhibition() else {
            return Vec::new();
        };

        self.catalog
            .pieces()
            .iter()
            .filter(|piece| exhibition.features(piece.artist) && self.filter.admits(piece.artist))
            .collect()
    }

    /// Whether per-artist filter buttons are offered.
    pub fn shows_artist_filters(&self) -> bool {
        self.active_exhibition()
            .is_some_and(|exhibition| exhibition.artists.len() > 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::content::{MOTHER_BROWN, THE_LINE};
    use eightspace_types::catalog::ExhibitionPoster;

    fn view() -> ExhibitionView {
        ExhibitionView::new(Arc::new(Catalog::eight_space()), None)
    }

    #[test]
    fn test_defaults_to_posters() {
        let view = view();
        assert_eq!(view.mode(), ViewMode::Posters);
        assert_eq!(view.filter(), ArtistFilter::All);
        assert!(view.pieces().is_empty());
        assert!(view.active_exhibition().is_none());
    }

    #[test]
    fn test_deep_link_opens_filtered_gallery() {
        let link = DeepLinkContext {
            exhibition: THE_LINE.to_string(),
            artist: Artist::MartinSeck,
        };
        let view = ExhibitionView::new(Arc::new(Catalog::eight_space()), Some(&link));

        assert_eq!(view.mode(), ViewMode::Gallery);
        assert_eq!(view.filter(), ArtistFilter::Artist(Artist::MartinSeck));
        let pieces = view.pieces();
        assert_eq!(pieces.len(), 4);
        assert!(pieces.iter().all(|p| p.artist == Artist::MartinSeck));
    }

    #[test]
    fn test_select_known_poster_resets_filter() {
        let mut view = view();
        view.set_filter(ArtistFilter::Artist(Artist::RodneyDickson));

        let selection = view.select_poster(THE_LINE).unwrap();
        assert_eq!(selection, PosterSelection::Gallery);
        assert_eq!(view.mode(), ViewMode::Gallery);
        assert_eq!(view.filter(), ArtistFilter::All);
        // Rodney Dickson, Martin Seck and Napoles Marty.
        assert_eq!(view.pieces().len(), 12);
        assert!(view.shows_artist_filters());
    }

    #[test]
    fn test_solo_exhibition_has_no_filters() {
        let mut view = view();
        view.select_poster(MOTHER_BROWN).unwrap();
        assert!(!view.shows_artist_filters());
        assert!(view.pieces().iter().all(|p| p.artist == Artist::AninditaDutta));
    }

    #[test]
    fn test_poster_without_exhibition_enlarges() {
        let catalog = Catalog::builder()
            .posters(vec![ExhibitionPoster {
                title: "Winter Open Studio".to_string(),
                url: "https://example.com/winter.png".to_string(),
            }])
            .build();
        let mut view = ExhibitionView::new(Arc::new(catalog), None);

        match view.select_poster("Winter Open Studio").unwrap() {
            PosterSelection::Enlarge(content) => {
                assert_eq!(content.url, "https://example.com/winter.png");
                assert_eq!(content.title.as_deref(), Some("Winter Open Studio"));
                assert!(content.hide_info);
                assert!(!content.shows_info());
            }
            other => panic!("expected Enlarge, got {other:?}"),
        }
        assert_eq!(view.mode(), ViewMode::Posters);
    }

    #[test]
    fn test_select_unknown_poster() {
        let mut view = view();
        assert!(matches!(
            view.select_poster("Nonexistent"),
            Err(CatalogError::UnknownExhibition(_))
        ));
    }

    #[test]
    fn test_back_to_posters_hides_pieces() {
        let mut view = view();
        view.select_poster(THE_LINE).unwrap();
        view.back_to_posters();
        assert_eq!(view.mode(), ViewMode::Posters);
        assert!(view.pieces().is_empty());
    }

    #[test]
    fn test_filter_outside_exhibition_is_empty() {
        let mut view = view();
        view.select_poster(THE_LINE).unwrap();
        view.set_filter(ArtistFilter::Artist(Artist::AninditaDutta));
        assert!(view.pieces().is_empty());
    }
}
