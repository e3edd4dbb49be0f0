//! Service configuration.

use std::path::PathBuf;

/// Default data directory when `FITDESK_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default bootstrap administrator email.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@gym.com";

/// Default bootstrap administrator display name.
pub const DEFAULT_ADMIN_NAME: &str = "Default Admin";

/// Default bootstrap administrator password. Intended for first login only;
/// the bootstrap logs a warning whenever it is still in use.
pub const DEFAULT_ADMIN_PASSWORD: &str = "password123";

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-entity store files (default: `./data`).
    pub data_dir: PathBuf,

    /// The administrator account seeded at startup when none exists.
    pub admin: AdminSeed,
}

/// Credentials for the startup administrator seed.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Raw password; hashed by the staff service during the seed.
    pub password: String,
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            name: DEFAULT_ADMIN_NAME.to_string(),
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults above.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("FITDESK_DATA_DIR")
                .unwrap_or_else(|_| DEFAULT_DATA_DIR.into())
                .into(),
            admin: AdminSeed {
                name: std::env::var("FITDESK_ADMIN_NAME")
                    .unwrap_or_else(|_| DEFAULT_ADMIN_NAME.into()),
                email: std::env::var("FITDESK_ADMIN_EMAIL")
                    .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.into()),
                password: std::env::var("FITDESK_ADMIN_PASSWORD")
                    .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into()),
            },
        }
    }

    /// Configuration rooted at the given data directory, with the default
    /// admin seed. Handy for embedding and tests.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            admin: AdminSeed::default(),
        }
    }
}
