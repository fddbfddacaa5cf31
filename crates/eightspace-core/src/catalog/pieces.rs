//! Derives catalogued art pieces from raw image URLs.
//!
//! Artists and titles are not stored separately; they are read off the
//! image host and filename (`Rodney-Dickson_5-scaled.jpg` -> Rodney Dickson,
//! "Rodney Dickson 5").

use std::collections::HashSet;

use eightspace_types::artist::Artist;
use eightspace_types::catalog::ArtPiece;

/// Hosts that serve a single artist's portfolio.
const ARTIST_HOSTS: &[(&str, Artist)] = &[("aninditadutta.com", Artist::AninditaDutta)];

/// Build the ordered piece list from raw URLs.
///
/// Duplicate URLs are dropped (first occurrence wins). Ids are `art-{n}`
/// where `n` is the position in the de-duplicated list. URLs that cannot be
/// attributed to an artist are skipped.
pub fn catalogue_pieces<I, S>(urls: I) -> Vec<ArtPiece>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let unique: Vec<String> = urls
        .into_iter()
        .map(|u| u.as_ref().to_string())
        .filter(|u| seen.insert(u.clone()))
        .collect();

    unique
        .into_iter()
        .enumerate()
        .filter_map(|(index, url)| {
            let filename = filename(&url).to_string();
            let Some(artist) = attribute_artist(&url) else {
                tracing::warn!(%url, "skipping image with no recognisable artist");
                return None;
            };
            Some(ArtPiece {
                id: format!("art-{index}"),
                title: title_from_filename(&filename),
                url,
                artist,
            })
        })
        .collect()
}

/// Attribute an image URL to an artist, by host first and filename second.
pub fn attribute_artist(url: &str) -> Option<Artist> {
    if let Some((_, artist)) = ARTIST_HOSTS.iter().find(|(host, _)| url.contains(host)) {
        return Some(*artist);
    }

    let name = filename(url);
    Artist::ALL
        .into_iter()
        .find(|artist| name.contains(&artist.display_name().replace(' ', "-")))
}

/// Turn an image filename into a display title.
pub fn title_from_filename(filename: &str) -> String {
    filename
        .replacen("-scaled.jpg", "", 1)
        .replacen(".jpg", "", 1)
        .replace(['_', '-'], " ")
}

fn filename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
