//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! `CatalogItem` mirrors the media fragment the catalog endpoint returns, so
//! every field beyond `id` is optional. `UserIdentity` is deliberately opaque:
//! the auth backend owns its shape and the client only passes it through.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated principal as returned by the auth backend.
///
/// The payload is kept verbatim; accessors only peek at well-known fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(serde_json::Value);

impl UserIdentity {
    /// Wrap a raw payload. Returns `None` unless it is a JSON object.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        value.is_object().then_some(Self(value))
    }

    /// The untouched payload.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Stable user identifier, when the backend supplies one.
    pub fn id(&self) -> Option<&str> {
        self.field("id")
    }

    /// Best-effort display name across common auth-provider field names.
    pub fn display_name(&self) -> Option<&str> {
        ["name", "fullName", "username", "firstName"]
            .iter()
            .filter_map(|key| self.field(key))
            .find(|name| !name.is_empty())
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.as_value().get(key).and_then(serde_json::Value::as_str)
    }
}

/// A catalog entry as represented in the wire protocol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Catalog identifier, unique within one list.
    pub id: i64,
    /// Localised titles; only the user-preferred one is displayed.
    #[serde(default)]
    pub title: Option<MediaTitle>,
    /// Cover artwork at the sizes the backend exposes.
    #[serde(default)]
    pub cover_image: Option<CoverImage>,
    /// Year of the first airing season.
    #[serde(default)]
    pub season_year: Option<i32>,
    /// Genre names, most relevant first. Entries may be null.
    #[serde(default)]
    pub genres: Option<Vec<Option<String>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTitle {
    #[serde(default)]
    pub user_preferred: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    #[serde(default)]
    pub extra_large: Option<String>,
}

impl CatalogItem {
    /// User-preferred title, treating an empty string as missing.
    pub fn preferred_title(&self) -> Option<&str> {
        self.title
            .as_ref()
            .and_then(|t| t.user_preferred.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Largest cover URL, treating an empty string as missing.
    pub fn cover_url(&self) -> Option<&str> {
        self.cover_image
            .as_ref()
            .and_then(|c| c.extra_large.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// First genre, if the list exists and its head is non-null.
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres
            .as_ref()
            .and_then(|g| g.first())
            .and_then(Option::as_deref)
    }
}
