//! Shared constants for the catalog client.

// ── Endpoints ───────────────────────────────────────────────────

/// REST endpoint returning the signed-in user record.
pub const AUTH_ME_ENDPOINT: &str = "/api/auth/me";

/// REST endpoint returning the current catalog page as a list of nullable items.
pub const CATALOG_ENDPOINT: &str = "/api/anime";

/// Hosted sign-in form served by the auth backend.
pub const AUTH_SIGN_IN_URL: &str = "/auth/login";

/// Hosted sign-up form served by the auth backend.
pub const AUTH_SIGN_UP_URL: &str = "/auth/join";

// ── Routes ──────────────────────────────────────────────────────

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const JOIN_PATH: &str = "/join";

/// Prefix for per-title detail routes (`/anime/{id}`).
pub const ANIME_PATH_PREFIX: &str = "/anime";

// ── Card display ────────────────────────────────────────────────

/// Shown in place of a missing or empty title.
pub const DEFAULT_TITLE: &str = "No Title";

/// Cover image used when an item has no artwork.
pub const DEFAULT_COVER: &str = "default.png";

/// Titles longer than this many characters are truncated.
pub const TITLE_MAX_CHARS: usize = 40;

/// Characters kept from a truncated title before the ellipsis.
pub const TITLE_KEEP_CHARS: usize = 37;

pub const TITLE_ELLIPSIS: &str = "...";

/// Intrinsic cover size handed to the lazy `<img>`.
pub const COVER_WIDTH_PX: u32 = 460;
pub const COVER_HEIGHT_PX: u32 = 650;

/// Number of placeholder cards rendered while the catalog loads.
pub const SKELETON_CARD_COUNT: usize = 6;

// ── Diagnostics ─────────────────────────────────────────────────

/// Context attached to bootstrap failure reports.
pub const BOOTSTRAP_REPORT_CONTEXT: &str = "Failed to fetch user data";
