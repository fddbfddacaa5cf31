use thiserror::Error;

use crate::artist::Artist;

/// Invalid navigator usage. State is left unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("unknown page: '{0}'")]
    UnknownPage(String),

    #[error("no exhibition is mapped for artist '{0}'")]
    NoExhibitionForArtist(Artist),

    #[error("unknown exhibition: '{0}'")]
    UnknownExhibition(String),
}

/// Failed lookups against the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no image available for artist '{0}'")]
    NoArtistImage(Artist),

    #[error("no biography for artist '{0}'")]
    NoBiography(Artist),

    #[error("unknown exhibition: '{0}'")]
    UnknownExhibition(String),

    #[error("unknown art piece: '{0}'")]
    UnknownPiece(String),
}

/// Submissions the curator refuses to take.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CuratorError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("the curator is still answering the previous question")]
    ReplyPending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_error_display() {
        let err = NavigationError::NoExhibitionForArtist(Artist::MartinSeck);
        assert_eq!(err.to_string(), "no exhibition is mapped for artist 'Martin Seck'");
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::UnknownPiece("art-99".to_string());
        assert_eq!(err.to_string(), "unknown art piece: 'art-99'");
    }

    #[test]
    fn test_curator_error_display() {
        assert_eq!(CuratorError::EmptyMessage.to_string(), "message is empty");
    }
}
