//! Error types for URL conf loading and settings

use std::path::PathBuf;

/// Errors raised while building [`Settings`](crate::Settings)
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid settings TOML: {0}")]
	Toml(#[from] toml::de::Error),

	/// The settings source parsed but names no root URL conf
	#[error("Settings do not define 'root_urlconf'")]
	MissingRootUrlconf,
}

/// Errors raised while resolving the root URL conf
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum UrlConfError {
	/// `root_urlconf` is empty and nothing was configured
	#[error("No root URL conf configured; call configure() or set SIMPLE_API_ROOT_URLCONF")]
	NotConfigured,

	#[error("Settings have already been configured")]
	AlreadyConfigured,

	#[error("URL conf '{module}' is not registered")]
	UnknownUrlConf { module: String },

	#[error("URL conf '{module}' is registered more than once")]
	DuplicateUrlConf { module: String },

	#[error(transparent)]
	Settings(#[from] SettingsError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unknown_urlconf_display() {
		let err = UrlConfError::UnknownUrlConf {
			module: "mysite.urls".to_string(),
		};

		assert_eq!(err.to_string(), "URL conf 'mysite.urls' is not registered");
	}

	#[rstest]
	fn test_settings_error_converts() {
		let err: UrlConfError = SettingsError::MissingRootUrlconf.into();

		assert!(matches!(
			err,
			UrlConfError::Settings(SettingsError::MissingRootUrlconf)
		));
		assert_eq!(err.to_string(), "Settings do not define 'root_urlconf'");
	}
}
