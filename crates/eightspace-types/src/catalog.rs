//! Static gallery content types.
//!
//! These types model the read-only content of the gallery: catalogued art
//! pieces, exhibitions and their posters, lightbox payloads, and the
//! about/visit copy.

use serde::{Deserialize, Serialize};

use crate::artist::Artist;

/// A single catalogued artwork image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtPiece {
    /// Stable identifier (`art-{index}` in catalog order).
    pub id: String,
    pub url: String,
    pub artist: Artist,
    /// Title derived from the image filename.
    pub title: String,
}

/// The identifying fields of the artwork a visitor is looking at.
///
/// Only read by the curator to enrich its prompt; it never owns artwork data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkContext {
    pub title: String,
    pub artist: Artist,
}

impl From<&ArtPiece> for ArtworkContext {
    fn from(piece: &ArtPiece) -> Self {
        Self {
            title: piece.title.clone(),
            artist: piece.artist,
        }
    }
}

/// A curated exhibition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exhibition {
    /// Exhibition title; also its identifier.
    pub title: String,
    /// Credit line shown under the title (e.g. "Curated by ...").
    pub curator_credit: String,
    /// Member artists, in display order.
    pub artists: Vec<Artist>,
    /// Optional lead-in line shown before the description.
    pub tagline: Option<String>,
    /// Long-form description, one entry per paragraph.
    pub description: Vec<String>,
}

impl Exhibition {
    /// Whether the given artist shows in this exhibition.
    pub fn features(&self, artist: Artist) -> bool {
        self.artists.contains(&artist)
    }
}

/// A poster advertising an exhibition. The first poster is the current show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionPoster {
    pub title: String,
    pub url: String,
}

/// Content shown enlarged in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LightboxContent {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Show the image only, without the info panel.
    #[serde(default)]
    pub hide_info: bool,
    /// Set when the enlarged item is a catalogued art piece.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork: Option<ArtworkContext>,
}

impl LightboxContent {
    /// Lightbox content for an art piece: image only, titled by the piece.
    pub fn for_piece(piece: &ArtPiece) -> Self {
        Self {
            url: piece.url.clone(),
            title: Some(piece.title.clone()),
            subtitle: Some(piece.artist.to_string()),
            description: None,
            hide_info: true,
            artwork: Some(ArtworkContext::from(piece)),
        }
    }

    /// Whether the info panel should be displayed.
    ///
    /// Requires `hide_info == false` and at least one non-empty text field.
    pub fn shows_info(&self) -> bool {
        let has_text = [&self.title, &self.subtitle, &self.description]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|s| !s.is_empty()));
        !self.hide_info && has_text
    }
}

/// Where an artist's portrait image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ArtistImage {
    /// An explicitly configured portrait/proxy image.
    Portrait { url: String },
    /// The first catalogued work by the artist.
    FirstWork { piece_id: String, url: String },
}

impl ArtistImage {
    pub fn url(&self) -> &str {
        match self {
            ArtistImage::Portrait { url } | ArtistImage::FirstWork { url, .. } => url,
        }
    }
}

/// A titled section of the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub heading: Option<String>,
    pub paragraphs: Vec<String>,
}

/// Practical visiting information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitInfo {
    pub venue: String,
    pub address_lines: Vec<String>,
    pub opening_hours: String,
    pub accessibility: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece() -> ArtPiece {
        ArtPiece {
            id: "art-0".to_string(),
            url: "https://example.com/Rodney-Dickson_5-scaled.jpg".to_string(),
            artist: Artist::RodneyDickson,
            title: "Rodney Dickson 5".to_string(),
        }
    }

    #[test]
    fn test_artwork_context_from_piece() {
        let ctx = ArtworkContext::from(&piece());
        assert_eq!(ctx.title, "Rodney Dickson 5");
        assert_eq!(ctx.artist, Artist::RodneyDickson);
    }

    #[test]
    fn test_lightbox_for_piece_hides_info() {
        let content = LightboxContent::for_piece(&piece());
        assert!(content.hide_info);
        assert!(!content.shows_info());
        assert_eq!(content.artwork.unwrap().title, "Rodney Dickson 5");
    }

    #[test]
    fn test_lightbox_shows_info_requires_text() {
        let bare = LightboxContent {
            url: "https://example.com/a.jpg".to_string(),
            ..Default::default()
        };
        assert!(!bare.shows_info());

        let empty_title = LightboxContent {
            title: Some(String::new()),
            ..bare.clone()
        };
        assert!(!empty_title.shows_info());

        let described = LightboxContent {
            description: Some("Bio".to_string()),
            ..bare
        };
        assert!(described.shows_info());
    }

    #[test]
    fn test_artist_image_url() {
        let portrait = ArtistImage::Portrait {
            url: "https://example.com/p.png".to_string(),
        };
        assert_eq!(portrait.url(), "https://example.com/p.png");

        let json = serde_json::to_string(&portrait).unwrap();
        assert!(json.contains("\"source\":\"portrait\""));
    }

    #[test]
    fn test_exhibition_features() {
        let exhibition = Exhibition {
            title: "Solo".to_string(),
            curator_credit: "Solo Exhibition".to_string(),
            artists: vec![Artist::AninditaDutta],
            tagline: None,
            description: vec![],
        };
        assert!(exhibition.features(Artist::AninditaDutta));
        assert!(!exhibition.features(Artist::MartinSeck));
    }
}
