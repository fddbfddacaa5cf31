use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// An artist represented by the gallery.
///
/// Serialized as the display name so catalog data and CLI output read the
/// same way the gallery prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Artist {
    #[serde(rename = "Anindita Dutta")]
    AninditaDutta,
    #[serde(rename = "Martin Seck")]
    MartinSeck,
    #[serde(rename = "Napoles Marty")]
    NapolesMarty,
    #[serde(rename = "Rodney Dickson")]
    RodneyDickson,
}

impl Artist {
    /// Every artist, in declaration order.
    pub const ALL: [Artist; 4] = [
        Artist::AninditaDutta,
        Artist::MartinSeck,
        Artist::NapolesMarty,
        Artist::RodneyDickson,
    ];

    /// The artist's name as printed on the site.
    pub fn display_name(&self) -> &'static str {
        match self {
            Artist::AninditaDutta => "Anindita Dutta",
            Artist::MartinSeck => "Martin Seck",
            Artist::NapolesMarty => "Napoles Marty",
            Artist::RodneyDickson => "Rodney Dickson",
        }
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Artist {
    type Err = String;

    /// Accepts the display name in any case, and the kebab/snake forms used
    /// in image filenames (`Rodney-Dickson`, `rodney_dickson`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Artist::ALL
            .into_iter()
            .find(|artist| artist.display_name().to_lowercase() == normalized)
            .ok_or_else(|| format!("unknown artist: '{s}'"))
    }
}
