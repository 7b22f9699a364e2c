//! Process settings naming the root URL conf

use crate::error::{SettingsError, UrlConfError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Settings read by [`list_routes`](crate::list_routes)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
	/// Module name of the root URL conf, e.g. `"mysite.urls"`
	#[serde(default)]
	pub root_urlconf: String,
}

impl Settings {
	/// Environment variable read by [`Settings::from_env`]
	pub const ROOT_URLCONF_ENV: &'static str = "SIMPLE_API_ROOT_URLCONF";

	pub fn new() -> Self {
		Self::default()
	}

	/// Set the root URL conf
	///
	/// # Examples
	///
	/// ```
	/// use simple_api_urls::Settings;
	///
	/// let settings = Settings::new().with_root_urlconf("mysite.urls");
	/// assert_eq!(settings.root_urlconf, "mysite.urls");
	/// ```
	pub fn with_root_urlconf(mut self, root_urlconf: impl Into<String>) -> Self {
		self.root_urlconf = root_urlconf.into();
		self
	}

	/// Check that a root URL conf is named
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.root_urlconf.trim().is_empty() {
			return Err(SettingsError::MissingRootUrlconf);
		}
		Ok(())
	}

	/// Parse settings from TOML
	///
	/// # Examples
	///
	/// ```
	/// use simple_api_urls::Settings;
	///
	/// let settings = Settings::from_toml_str(r#"root_urlconf = "mysite.urls""#).unwrap();
	/// assert_eq!(settings.root_urlconf, "mysite.urls");
	/// ```
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(contents)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&contents)
	}

	/// Load settings from the process environment
	///
	/// Unset variables leave the defaults in place.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let mut settings = Self::default();
		if let Some(root_urlconf) = lookup(Self::ROOT_URLCONF_ENV) {
			settings.root_urlconf = root_urlconf;
		}
		settings
	}
}

/// Install the process-wide settings
///
/// Must happen before the first call to [`settings`] or
/// [`list_routes`](crate::list_routes).
///
/// # Errors
///
/// Returns [`UrlConfError::AlreadyConfigured`] if settings were already
/// installed or already read.
pub fn configure(settings: Settings) -> Result<(), UrlConfError> {
	tracing::debug!(root_urlconf = %settings.root_urlconf, "configuring settings");
	SETTINGS
		.set(settings)
		.map_err(|_| UrlConfError::AlreadyConfigured)
}

/// Process-wide settings, read from the environment if never configured
pub fn settings() -> &'static Settings {
	SETTINGS.get_or_init(Settings::from_env)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_from_lookup_reads_root_urlconf() {
		let settings = Settings::from_lookup(|key| {
			(key == Settings::ROOT_URLCONF_ENV).then(|| "mysite.urls".to_string())
		});

		assert_eq!(settings.root_urlconf, "mysite.urls");
	}

	#[rstest]
	fn test_from_lookup_defaults_when_unset() {
		let settings = Settings::from_lookup(|_| None);

		assert_eq!(settings, Settings::default());
		assert!(settings.validate().is_err());
	}

	#[rstest]
	#[case("")]
	#[case("root_urlconf = \"\"")]
	#[case("root_urlconf = \"   \"")]
	fn test_from_toml_str_requires_root_urlconf(#[case] contents: &str) {
		let err = Settings::from_toml_str(contents).unwrap_err();

		assert!(matches!(err, SettingsError::MissingRootUrlconf));
	}

	#[rstest]
	fn test_from_toml_str_rejects_invalid_toml() {
		let err = Settings::from_toml_str("root_urlconf = ").unwrap_err();

		assert!(matches!(err, SettingsError::Toml(_)));
	}

	#[rstest]
	fn test_from_file_reads_toml() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "root_urlconf = \"config.urls\"").unwrap();

		let settings = Settings::from_file(file.path()).unwrap();

		assert_eq!(settings.root_urlconf, "config.urls");
	}

	#[rstest]
	fn test_from_file_reports_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.toml");

		let err = Settings::from_file(&path).unwrap_err();

		match err {
			SettingsError::Io { path: reported, .. } => assert_eq!(reported, path),
			other => panic!("unexpected error: {other}"),
		}
	}
}
