//! Navigation values shared between the navigator and its renderers.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::artist::Artist;
use crate::error::NavigationError;

/// The top-level pages of the site. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Exhibition,
    Artists,
    About,
    Visit,
}

impl Page {
    /// Pages in menu order.
    pub const ALL: [Page; 4] = [Page::Exhibition, Page::Artists, Page::About, Page::Visit];

    pub fn name(&self) -> &'static str {
        match self {
            Page::Exhibition => "Exhibition",
            Page::Artists => "Artists",
            Page::About => "About",
            Page::Visit => "Visit",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NavigationError::UnknownPage(s.to_string()))
    }
}

/// Handoff from the artist roster to the exhibition view: open this
/// exhibition, filtered to this artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkContext {
    pub exhibition: String,
    pub artist: Artist,
}
