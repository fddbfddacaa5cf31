//! Read-only gallery catalog.
//!
//! [`Catalog::eight_space`] assembles the gallery's checked-in content.
//! [`CatalogBuilder`] assembles partial catalogs for tests and alternative
//! deployments.

pub mod content;
pub mod pieces;

use std::collections::HashMap;

use eightspace_types::artist::Artist;
use eightspace_types::catalog::{
    AboutSection, ArtPiece, ArtistImage, Exhibition, ExhibitionPoster, LightboxContent, VisitInfo,
};
use eightspace_types::error::CatalogError;

/// Subtitle used on an artist's profile lightbox.
pub const ARTIST_PROFILE_SUBTITLE: &str = "Artist Profile";

/// Static gallery content: pieces, biographies, exhibitions and copy.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pieces: Vec<ArtPiece>,
    biographies: HashMap<Artist, String>,
    portraits: HashMap<Artist, String>,
    exhibitions: Vec<Exhibition>,
    posters: Vec<ExhibitionPoster>,
    about: Vec<AboutSection>,
    visit: Option<VisitInfo>,
    logo_url: Option<String>,
}

impl Catalog {
    /// The Eight Space's own catalog.
    pub fn eight_space() -> Self {
        let mut builder = CatalogBuilder::new()
            .piece_urls(content::PIECE_URLS.iter().copied())
            .posters(content::posters())
            .about(content::about())
            .visit(content::visit())
            .logo_url(content::LOGO_URL);

        for artist in Artist::ALL {
            builder = builder.biography(artist, content::biography(artist));
        }
        for (artist, url) in content::portraits() {
            builder = builder.portrait(artist, url);
        }
        for exhibition in content::exhibitions() {
            builder = builder.exhibition(exhibition);
        }

        builder.build()
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Every catalogued piece, in catalog order.
    pub fn pieces(&self) -> &[ArtPiece] {
        &self.pieces
    }

    pub fn piece(&self, id: &str) -> Result<&ArtPiece, CatalogError> {
        self.pieces
            .iter()
            .find(|piece| piece.id == id)
            .ok_or_else(|| CatalogError::UnknownPiece(id.to_string()))
    }

    /// Pieces by one artist, in catalog order.
    pub fn pieces_by(&self, artist: Artist) -> impl Iterator<Item = &ArtPiece> {
        self.pieces.iter().filter(move |piece| piece.artist == artist)
    }

    /// Artists on the roster (those with a biography), sorted by name.
    pub fn artists(&self) -> Vec<Artist> {
        let mut artists: Vec<Artist> = self.biographies.keys().copied().collect();
        artists.sort_by_key(|artist| artist.display_name());
        artists
    }

    pub fn biography(&self, artist: Artist) -> Result<&str, CatalogError> {
        self.biographies
            .get(&artist)
            .map(String::as_str)
            .ok_or(CatalogError::NoBiography(artist))
    }

    /// The exhibition an artist is shown in, if any.
    pub fn exhibition_for_artist(&self, artist: Artist) -> Option<&Exhibition> {
        self.exhibitions.iter().find(|exhibition| exhibition.features(artist))
    }

    /// Look up an exhibition by title (case-insensitive).
    pub fn exhibition(&self, title: &str) -> Result<&Exhibition, CatalogError> {
        let wanted = title.trim();
        self.exhibitions
            .iter()
            .find(|exhibition| exhibition.title.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownExhibition(title.to_string()))
    }

    pub fn exhibitions(&self) -> &[Exhibition] {
        &self.exhibitions
    }

    /// Posters in display order.
    pub fn posters(&self) -> &[ExhibitionPoster] {
        &self.posters
    }

    /// The featured poster: the first one.
    pub fn current_poster(&self) -> Option<&ExhibitionPoster> {
        self.posters.first()
    }

    /// Resolve the image shown for an artist.
    ///
    /// An explicit portrait wins; otherwise the artist's first catalogued
    /// work is used.
    pub fn artist_image(&self, artist: Artist) -> Result<ArtistImage, CatalogError> {
        if let Some(url) = self.portraits.get(&artist) {
            return Ok(ArtistImage::Portrait { url: url.clone() });
        }

        self.pieces_by(artist)
            .next()
            .map(|piece| ArtistImage::FirstWork {
                piece_id: piece.id.clone(),
                url: piece.url.clone(),
            })
            .ok_or(CatalogError::NoArtistImage(artist))
    }

    /// Lightbox content for an artist's profile: portrait, name and biography.
    pub fn artist_profile(&self, artist: Artist) -> Result<LightboxContent, CatalogError> {
        let image = self.artist_image(artist)?;
        Ok(LightboxContent {
            url: image.url().to_string(),
            title: Some(artist.display_name().to_string()),
            subtitle: Some(ARTIST_PROFILE_SUBTITLE.to_string()),
            description: self.biography(artist).ok().map(str::to_string),
            hide_info: false,
            artwork: None,
        })
    }

    pub fn about(&self) -> &[AboutSection] {
        &self.about
    }

    pub fn visit(&self) -> Option<&VisitInfo> {
        self.visit.as_ref()
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }
}

/// Incremental catalog assembly.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue pieces from raw image URLs (see [`pieces::catalogue_pieces`]).
    ///
    /// Replaces any previously supplied pieces so ids stay positional.
    pub fn piece_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.catalog.pieces = pieces::catalogue_pieces(urls);
        self
    }

    pub fn biography(mut self, artist: Artist, text: impl Into<String>) -> Self {
        self.catalog.biographies.insert(artist, text.into());
        self
    }

    pub fn portrait(mut self, artist: Artist, url: impl Into<String>) -> Self {
        self.catalog.portraits.insert(artist, url.into());
        self
    }

    pub fn exhibition(mut self, exhibition: Exhibition) -> Self {
        self.catalog.exhibitions.push(exhibition);
        self
    }

    pub fn posters(mut self, posters: Vec<ExhibitionPoster>) -> Self {
        self.catalog.posters = posters;
        self
    }

    pub fn about(mut self, sections: Vec<AboutSection>) -> Self {
        self.catalog.about = sections;
        self
    }

    pub fn visit(mut self, visit: VisitInfo) -> Self {
        self.catalog.visit = Some(visit);
        self
    }

    pub fn logo_url(mut self, url: impl Into<String>) -> Self {
        self.catalog.logo_url = Some(url.into());
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_space_pieces() {
        let catalog = Catalog::eight_space();
        assert_eq!(catalog.pieces().len(), 23);
        assert_eq!(catalog.pieces()[0].id, "art-0");
        assert_eq!(catalog.pieces()[0].artist, Artist::RodneyDickson);
        assert_eq!(catalog.pieces()[0].title, "Rodney Dickson 5");
        assert_eq!(catalog.pieces_by(Artist::MartinSeck).count(), 4);
        assert_eq!(catalog.pieces_by(Artist::NapolesMarty).count(), 3);
        assert_eq!(catalog.pieces_by(Artist::AninditaDutta).count(), 11);
    }

    #[test]
    fn test_piece_lookup() {
        let catalog = Catalog::eight_space();
        assert_eq!(catalog.piece("art-5").unwrap().title, "Martin Seck 4");
        assert_eq!(
            catalog.piece("art-99"),
            Err(CatalogError::UnknownPiece("art-99".to_string()))
        );
    }

    #[test]
    fn test_artists_sorted() {
        let catalog = Catalog::eight_space();
        assert_eq!(
            catalog.artists(),
            vec![
                Artist::AninditaDutta,
                Artist::MartinSeck,
                Artist::NapolesMarty,
                Artist::RodneyDickson
            ]
        );
    }

    #[test]
    fn test_exhibition_for_artist() {
        let catalog = Catalog::eight_space();
        let exhibition = catalog.exhibition_for_artist(Artist::MartinSeck).unwrap();
        assert_eq!(exhibition.title, content::THE_LINE);
        let exhibition = catalog.exhibition_for_artist(Artist::AninditaDutta).unwrap();
        assert_eq!(exhibition.title, content::MOTHER_BROWN);
    }

    #[test]
    fn test_exhibition_lookup() {
        let catalog = Catalog::eight_space();
        let exhibition = catalog
            .exhibition("the line starts from where you stand")
            .unwrap();
        assert_eq!(exhibition.curator_credit, "Curated by Madhavan Pillai");
        assert_eq!(exhibition.description.len(), 3);

        assert!(matches!(
            catalog.exhibition("Summer Salon"),
            Err(CatalogError::UnknownExhibition(_))
        ));
    }

    #[test]
    fn test_current_poster_is_first() {
        let catalog = Catalog::eight_space();
        assert_eq!(catalog.current_poster().unwrap().title, content::THE_LINE);
        assert_eq!(catalog.posters().len(), 2);
    }

    #[test]
    fn test_artist_image_prefers_portrait() {
        let catalog = Catalog::eight_space();
        let image = catalog.artist_image(Artist::AninditaDutta).unwrap();
        assert!(matches!(image, ArtistImage::Portrait { .. }));
        assert!(image.url().ends_with("Mother-Brown-Gold-Fields-and-Wild-Honey.png"));
    }

    #[test]
    fn test_artist_image_falls_back_to_first_work() {
        let catalog = Catalog::eight_space();
        let image = catalog.artist_image(Artist::MartinSeck).unwrap();
        assert_eq!(
            image,
            ArtistImage::FirstWork {
                piece_id: "art-5".to_string(),
                url: "https://maddyworks.com/wp-content/uploads/2025/12/Martin-Seck_4-scaled.jpg"
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_artist_image_not_found() {
        let catalog = Catalog::builder()
            .biography(Artist::NapolesMarty, "Carves and chars wood.")
            .build();
        assert_eq!(
            catalog.artist_image(Artist::NapolesMarty),
            Err(CatalogError::NoArtistImage(Artist::NapolesMarty))
        );
        assert!(catalog.artist_profile(Artist::NapolesMarty).is_err());
    }

    #[test]
    fn test_artist_profile() {
        let catalog = Catalog::eight_space();
        let profile = catalog.artist_profile(Artist::RodneyDickson).unwrap();
        assert_eq!(profile.title.as_deref(), Some("Rodney Dickson"));
        assert_eq!(profile.subtitle.as_deref(), Some(ARTIST_PROFILE_SUBTITLE));
        assert!(profile.description.unwrap().contains("bedsheets"));
        assert!(!profile.hide_info);
        assert!(profile.artwork.is_none());
    }

    #[test]
    fn test_builder_partial_catalog() {
        let catalog = Catalog::builder()
            .piece_urls(["https://maddyworks.com/a/Napoles-Marty_1-scaled.jpg"])
            .build();
        assert_eq!(catalog.pieces().len(), 1);
        assert!(catalog.artists().is_empty());
        assert!(catalog.exhibitions().is_empty());
        assert!(catalog.current_poster().is_none());
        assert!(catalog.visit().is_none());
        assert_eq!(
            catalog.biography(Artist::NapolesMarty),
            Err(CatalogError::NoBiography(Artist::NapolesMarty))
        );
    }

    #[test]
    fn test_about_and_visit() {
        let catalog = Catalog::eight_space();
        assert_eq!(catalog.about().len(), 4);
        assert_eq!(catalog.about()[1].heading.as_deref(), Some("What We Believe"));
        let visit = catalog.visit().unwrap();
        assert_eq!(visit.address_lines[0], "50 Elm Street");
    }
}
