//! Configuration constants for wildatlas app services

/// Application metadata
pub mod app {
    /// Application name (used for the config directory, etc.)
    pub const NAME: &str = "wildatlas";
}

/// Profile defaults and limits
pub mod profile {
    /// Display name substituted for an empty or missing one
    pub const DEFAULT_DISPLAY_NAME: &str = "Username";

    /// Lowest valid avatar id (also the default)
    pub const AVATAR_ID_MIN: i64 = 1;

    /// Highest valid avatar id
    pub const AVATAR_ID_MAX: i64 = 4;
}

/// Auth-related configuration
pub mod auth {
    /// Minimum password length accepted at sign-up
    pub const MIN_PASSWORD_LEN: usize = 6;
}
