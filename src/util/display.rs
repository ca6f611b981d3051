//! Pure formatting for catalog cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AnimeList` renders whatever `cards` yields; keeping the filtering and text
//! rules here lets them be tested without a reactive runtime.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::consts::{
    ANIME_PATH_PREFIX, DEFAULT_COVER, DEFAULT_TITLE, TITLE_ELLIPSIS, TITLE_KEEP_CHARS, TITLE_MAX_CHARS,
};
use crate::net::types::CatalogItem;

/// Display-ready fields for one grid card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardModel<'a> {
    pub item: &'a CatalogItem,
    pub href: String,
    /// Caption text, truncated.
    pub title: String,
    /// Image alt text, the full title.
    pub alt: &'a str,
    pub cover: &'a str,
    pub subtitle: String,
}

/// Title or the fixed fallback, untruncated.
pub fn full_title(title: Option<&str>) -> &str {
    title.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TITLE)
}

/// Caption text: the title (or fallback), cut to fit the card.
///
/// Titles over [`TITLE_MAX_CHARS`] keep their first [`TITLE_KEEP_CHARS`]
/// characters plus an ellipsis, so the result is never longer than the limit.
pub fn display_title(title: Option<&str>) -> String {
    let title = full_title(title);
    if title.chars().count() <= TITLE_MAX_CHARS {
        return title.to_owned();
    }
    let mut out: String = title.chars().take(TITLE_KEEP_CHARS).collect();
    out.push_str(TITLE_ELLIPSIS);
    out
}

pub fn cover_src(item: &CatalogItem) -> &str {
    item.cover_url().unwrap_or(DEFAULT_COVER)
}

/// `"{year}, {genre}"`, leaving either side blank when unknown.
pub fn subtitle(item: &CatalogItem) -> String {
    let year = item.season_year.map(|y| y.to_string()).unwrap_or_default();
    let genre = item.primary_genre().unwrap_or_default();
    format!("{year}, {genre}")
}

pub fn detail_href(id: i64) -> String {
    format!("{ANIME_PATH_PREFIX}/{id}")
}

pub fn card(item: &CatalogItem) -> CardModel<'_> {
    let title = item.preferred_title();
    CardModel {
        item,
        href: detail_href(item.id),
        title: display_title(title),
        alt: full_title(title),
        cover: cover_src(item),
        subtitle: subtitle(item),
    }
}

/// Lazily map a source list to cards, skipping absent entries in order.
pub fn cards(items: &[Option<CatalogItem>]) -> impl Iterator<Item = CardModel<'_>> {
    items.iter().flatten().map(card)
}
