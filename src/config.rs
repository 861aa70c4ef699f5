use biblio_catalog::IntegrityPolicy;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration for the console app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Location of the catalog database file.
    pub database: PathBuf,
    /// How review → book references are treated; permissive by default.
    #[serde(default)]
    pub integrity: IntegrityPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            integrity: IntegrityPolicy::default(),
        }
    }
}

/// Per-user data directory, falling back to the working directory when the
/// platform gives us nothing to work with.
fn default_database_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "biblio")
        .map(|dirs| dirs.data_dir().join("catalog.db"))
        .unwrap_or_else(|| PathBuf::from("catalog.db"))
}

impl Config {
    /// Layered load: serde defaults, then the TOML file, then `BIBLIO_*`
    /// environment variables (nested keys split on `__`, e.g.
    /// `BIBLIO_INTEGRITY__CASCADE_REVIEWS=true`).
    ///
    /// Without an explicit path, a `biblio.toml` in the working directory
    /// is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        let figment = match path {
            Some(path) => figment.merge(Toml::file_exact(path)),
            None => figment.merge(Toml::file("biblio.toml")),
        };
        figment.merge(Env::prefixed("BIBLIO_").split("__")).extract()
    }
}
