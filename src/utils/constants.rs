/// localStorage key for the bearer token.
pub const STORAGE_KEY_TOKEN: &str = "quickdesk_token";

/// localStorage key for the theme preference.
pub const STORAGE_KEY_THEME: &str = "quickdesk-theme";
