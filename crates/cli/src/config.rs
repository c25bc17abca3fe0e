//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BALADE_BASE_URL` - Public URL of the site (default: <https://www.balade.fr>)
//! - `BALADE_ZONES_FILE` - YAML file replacing the built-in zones
//! - `BALADE_SERVICES_FILE` - YAML file replacing the built-in services
//! - `BALADE_DEFAULT_SERVICE` - Service slug used when a command gets no
//!   `--service` (default: `promenade-chien`)
//! - `RUST_LOG` - Log filter (default: `balade_cli=info,balade_core=info`)

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use balade_core::{Registry, RegistryError, Slug, registry};
use balade_seo::Site;
use balade_seo::site::DEFAULT_BASE_URL;
use thiserror::Error;
use url::Url;

const DEFAULT_SERVICE: &str = "promenade-chien";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid registry data: {0}")]
    Registry(#[from] RegistryError),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Public base URL of the site
    pub base_url: Url,
    /// Replacement zones file
    pub zones_file: Option<PathBuf>,
    /// Replacement services file
    pub services_file: Option<PathBuf>,
    /// Service used when a command names none
    pub default_service: Slug,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(&get_env_or_default("BALADE_BASE_URL", DEFAULT_BASE_URL))
            .map_err(|e| ConfigError::InvalidEnvVar("BALADE_BASE_URL".to_string(), e))?;
        let default_service =
            Slug::parse(&get_env_or_default("BALADE_DEFAULT_SERVICE", DEFAULT_SERVICE)).map_err(
                |e| ConfigError::InvalidEnvVar("BALADE_DEFAULT_SERVICE".to_string(), e.to_string()),
            )?;

        Ok(Self {
            base_url,
            zones_file: get_optional_env("BALADE_ZONES_FILE").map(PathBuf::from),
            services_file: get_optional_env("BALADE_SERVICES_FILE").map(PathBuf::from),
            default_service,
        })
    }

    /// Site settings derived from the base URL.
    #[must_use]
    pub fn site(&self) -> Site {
        Site::new(self.base_url.as_str())
    }

    /// The registry to work on: the built-in one unless a file overrides it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an override file cannot be read or parsed.
    pub fn registry(&self) -> Result<Cow<'static, Registry>, ConfigError> {
        if self.zones_file.is_none() && self.services_file.is_none() {
            return Ok(Cow::Borrowed(registry::builtin()));
        }

        let zones = read_or_builtin(self.zones_file.as_deref(), registry::ZONES_YAML)?;
        let services = read_or_builtin(self.services_file.as_deref(), registry::SERVICES_YAML)?;
        let loaded = Registry::from_yaml(&zones, &services)?;

        tracing::info!(
            zones = loaded.zones().len(),
            services = loaded.services().len(),
            "Loaded registry from override files"
        );
        Ok(Cow::Owned(loaded))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and check a public base URL.
fn parse_base_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme {other}")),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err("must not have a query or fragment".to_string());
    }
    Ok(url)
}

fn read_or_builtin(path: Option<&Path>, builtin: &'static str) -> Result<String, ConfigError> {
    path.map_or_else(
        || Ok(builtin.to_string()),
        |path| {
            std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            base_url: parse_base_url(DEFAULT_BASE_URL).unwrap(),
            zones_file: None,
            services_file: None,
            default_service: Slug::parse(DEFAULT_SERVICE).unwrap(),
        }
    }

    #[test]
    fn test_parse_base_url_valid() {
        assert!(parse_base_url("https://www.balade.fr").is_ok());
        assert!(parse_base_url("http://localhost:3000/").is_ok());
    }

    #[test]
    fn test_parse_base_url_rejects_other_schemes() {
        let err = parse_base_url("ftp://balade.fr").unwrap_err();
        assert_eq!(err, "unsupported scheme ftp");
    }

    #[test]
    fn test_parse_base_url_rejects_query() {
        assert!(parse_base_url("https://www.balade.fr/?utm=1").is_err());
        assert!(parse_base_url("https://www.balade.fr/#top").is_err());
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_site_has_no_trailing_slash() {
        let site = config().site();
        assert_eq!(site.base_url(), "https://www.balade.fr");
    }

    #[test]
    fn test_registry_defaults_to_builtin() {
        let registry = config().registry().unwrap();
        assert!(matches!(registry, Cow::Borrowed(_)));
    }

    #[test]
    fn test_registry_override_missing_file() {
        let config = CliConfig {
            zones_file: Some(PathBuf::from("/nonexistent/zones.yaml")),
            ..config()
        };
        let err = config.registry().unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(
            err.to_string()
                .starts_with("Failed to read /nonexistent/zones.yaml: ")
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_registry_override_file() {
        let path = std::env::temp_dir().join(format!("balade-zones-{}.yaml", std::process::id()));
        std::fs::write(
            &path,
            r#"
zones:
  - id: brest
    name: Brest
    slug: brest
    type: city
    priority: 2
    department: "29"
    image: /images/zones/brest.jpg
    image_alt: Port de Brest
    description: La pointe bretonne.
    highlights: [Jardin des explorateurs]
"#,
        )
        .unwrap();

        let config = CliConfig {
            zones_file: Some(path.clone()),
            ..config()
        };
        let registry = config.registry().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(registry.zones().len(), 1);
        assert!(registry.service("promenade-chien").is_some());
    }
}
